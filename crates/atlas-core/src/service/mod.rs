// crates/atlas-core/src/service/mod.rs

//! # Service Layer
//!
//! Composes repositories, the query pipeline and pagination into the named
//! use cases. Errors from lower layers pass through unchanged.

use crate::loader::{DataPaths, DatasetCache};
use crate::repository::{CapitalRepository, CountryRepository};
use std::sync::Arc;

pub mod capital;
pub mod country;
pub mod statistics;

pub use capital::CapitalService;
pub use country::CountryService;
pub use statistics::StatisticsService;

/// All services wired against one dataset cache.
///
/// Construct once at startup and share; cloning is cheap.
#[derive(Debug, Clone)]
pub struct Atlas {
    pub countries: CountryService,
    pub capitals: CapitalService,
    pub statistics: StatisticsService,
}

impl Atlas {
    /// Wire services over `paths` with a fresh cache.
    pub fn open(paths: &DataPaths) -> Self {
        Self::with_cache(paths, Arc::new(DatasetCache::new()))
    }

    /// Wire services over `paths`, sharing an existing cache.
    pub fn with_cache(paths: &DataPaths, cache: Arc<DatasetCache>) -> Self {
        let country_repo = Arc::new(CountryRepository::new(&paths.countries, Arc::clone(&cache)));
        let capital_repo = Arc::new(CapitalRepository::new(&paths.capitals, cache));
        Self {
            countries: CountryService::new(Arc::clone(&country_repo)),
            capitals: CapitalService::new(Arc::clone(&capital_repo)),
            statistics: StatisticsService::new(country_repo, capital_repo),
        }
    }

    /// The datasets bundled with this crate.
    pub fn bundled() -> Self {
        Self::open(&DataPaths::bundled())
    }
}
