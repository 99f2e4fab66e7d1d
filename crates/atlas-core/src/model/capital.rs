// crates/atlas-core/src/model/capital.rs
use crate::traits::{Record, SortField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A capital city. `name` is the natural key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capital {
    pub name: String,
    /// Name of the owning country.
    pub country: String,
    pub population: u64,
    pub lat: f64,
    pub lng: f64,
}

impl Capital {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn country(&self) -> &str {
        &self.country
    }
    pub fn population(&self) -> u64 {
        self.population
    }
}

impl Record for Capital {
    type SortField = CapitalSortField;

    const LABEL: &'static str = "capital";

    const REQUIRED_KEYS: &'static [&'static str] = &["name", "country", "population", "lat", "lng"];

    fn natural_key(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), String> {
        super::check_coordinates(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapitalSortField {
    Name,
    Country,
    Population,
    Lat,
    Lng,
}

impl SortField<Capital> for CapitalSortField {
    const ALL: &'static [(&'static str, Self)] = &[
        ("name", Self::Name),
        ("country", Self::Country),
        ("population", Self::Population),
        ("lat", Self::Lat),
        ("lng", Self::Lng),
    ];

    fn compare(self, a: &Capital, b: &Capital) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Country => a.country.cmp(&b.country),
            Self::Population => a.population.cmp(&b.population),
            Self::Lat => a.lat.total_cmp(&b.lat),
            Self::Lng => a.lng.total_cmp(&b.lng),
        }
    }
}
