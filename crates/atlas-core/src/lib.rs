// crates/atlas-core/src/lib.rs

//! atlas-core
//! ==========
//!
//! Read-only country and capital reference data, loaded from static JSON
//! files and queried in memory: text search, categorical, range and
//! membership filters, sorting, pagination and a few statistics.
//!
//! ```no_run
//! use atlas_core::prelude::*;
//!
//! let atlas = Atlas::bundled();
//! let criteria = SearchCriteria::default()
//!     .with_region("Europe")
//!     .sorted_by("population", SortOrder::Desc);
//! let page = atlas.countries.list_countries(PageRequest::default(), &criteria)?;
//! for c in &page.items {
//!     println!("{} ({})", c.name(), c.iso_code());
//! }
//! # Ok::<(), atlas_core::AtlasError>(())
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod pagination;
pub mod prelude;
pub mod query;
pub mod repository;
pub mod service;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{AtlasError, ErrorKind, Result};
pub use crate::loader::{default_data_dir, DataPaths, DatasetCache};
pub use crate::model::{Capital, CapitalSortField, Country, CountrySortField};
pub use crate::pagination::{paginate, Page, PageMeta, PageRequest};
pub use crate::query::{SearchCriteria, SortOrder};
pub use crate::repository::{CapitalRepository, CountryRepository, Repository};
pub use crate::service::{Atlas, CapitalService, CountryService, StatisticsService};
