// crates/atlas-core/src/query/mod.rs

//! # Query Pipeline
//!
//! Stages run in a fixed order: text search, categorical filters, numeric
//! ranges, list membership, then sort. Each stage narrows the output of the
//! previous one.

use crate::error::{AtlasError, Result};
use crate::model::{Capital, Country};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;

pub mod stages;

/// Sort direction. Ascending unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(AtlasError::invalid_argument(
                format!("order must be 'asc' or 'desc', got '{other}'"),
                json!({ "order": other }),
            )),
        }
    }
}

/// Search, filter and sort criteria. Every field left unset is pass-through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Free-text term. Countries match it against name, official name and
    /// capital; capitals against their name.
    pub name: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub sort_by: Option<String>,
    pub order: SortOrder,
}

impl SearchCriteria {
    pub fn with_name(mut self, term: impl Into<String>) -> Self {
        self.name = Some(term.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.order = order;
        self
    }
}

/// Run the full country pipeline over a snapshot.
pub fn filter_countries<'a>(countries: &'a [Country], criteria: &SearchCriteria) -> Result<Vec<&'a Country>> {
    let all: Vec<&Country> = countries.iter().collect();

    let mut out = stages::union_search(
        &all,
        &[Country::name, Country::official_name, Country::capital],
        criteria.name.as_deref(),
    );
    out = stages::filter_exact(out, Country::region, criteria.region.as_deref());
    out = stages::filter_exact(out, Country::subregion, criteria.subregion.as_deref());
    out = stages::filter_range(out, Country::population, criteria.min_population, criteria.max_population);
    out = stages::filter_range(out, Country::area, criteria.min_area, criteria.max_area);
    out = stages::filter_membership(out, Country::languages, criteria.language.as_deref());
    out = stages::filter_membership(out, Country::currencies, criteria.currency.as_deref());

    stages::sort_by_name(out, criteria.sort_by.as_deref(), criteria.order)
}

/// Capitals only support name search and sorting; other criteria are ignored.
pub fn filter_capitals<'a>(capitals: &'a [Capital], criteria: &SearchCriteria) -> Result<Vec<&'a Capital>> {
    let all: Vec<&Capital> = capitals.iter().collect();
    let out = stages::text_search(&all, Capital::name, criteria.name.as_deref());
    stages::sort_by_name(out, criteria.sort_by.as_deref(), criteria.order)
}
