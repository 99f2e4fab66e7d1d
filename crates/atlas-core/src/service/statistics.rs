// crates/atlas-core/src/service/statistics.rs
use crate::common::DbStats;
use crate::error::{AtlasError, Result};
use crate::model::{Country, CountrySortField};
use crate::query::{stages, SortOrder};
use crate::repository::{CapitalRepository, CountryRepository};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Aggregated analytics over both datasets.
#[derive(Debug, Clone)]
pub struct StatisticsService {
    countries: Arc<CountryRepository>,
    capitals: Arc<CapitalRepository>,
}

impl StatisticsService {
    pub const DEFAULT_TOP_LIMIT: i64 = 5;

    pub fn new(countries: Arc<CountryRepository>, capitals: Arc<CapitalRepository>) -> Self {
        Self { countries, capitals }
    }

    pub fn total_countries(&self) -> Result<usize> {
        Ok(self.countries.get_all()?.len())
    }

    pub fn total_capitals(&self) -> Result<usize> {
        Ok(self.capitals.get_all()?.len())
    }

    pub fn totals(&self) -> Result<DbStats> {
        Ok(DbStats {
            countries: self.total_countries()?,
            capitals: self.total_capitals()?,
        })
    }

    /// The `limit` countries ranked by population in `order`.
    ///
    /// Fails with `InvalidArgument` when `limit <= 0`.
    pub fn top_by_population(&self, limit: i64, order: SortOrder) -> Result<Vec<Country>> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| AtlasError::invalid_argument("limit must be positive", json!({ "limit": limit })))?;

        let all = self.countries.get_all()?;
        let refs: Vec<&Country> = all.iter().collect();
        let ranked = stages::sort_records(refs, CountrySortField::Population, order);
        Ok(ranked.into_iter().take(limit).cloned().collect())
    }

    pub fn top_largest_populations(&self, limit: i64) -> Result<Vec<Country>> {
        self.top_by_population(limit, SortOrder::Desc)
    }

    pub fn top_smallest_populations(&self, limit: i64) -> Result<Vec<Country>> {
        self.top_by_population(limit, SortOrder::Asc)
    }

    /// Region → number of countries.
    pub fn region_distribution(&self) -> Result<BTreeMap<String, usize>> {
        let mut regions = BTreeMap::new();
        for c in self.countries.get_all()?.iter() {
            *regions.entry(c.region.clone()).or_insert(0) += 1;
        }
        Ok(regions)
    }

    /// Language → number of countries listing it (one per country).
    pub fn language_distribution(&self) -> Result<BTreeMap<String, usize>> {
        let mut languages = BTreeMap::new();
        for c in self.countries.get_all()?.iter() {
            for (i, lang) in c.languages.iter().enumerate() {
                if c.languages[..i].contains(lang) {
                    continue;
                }
                *languages.entry(lang.clone()).or_insert(0) += 1;
            }
        }
        Ok(languages)
    }
}
