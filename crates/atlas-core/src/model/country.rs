// crates/atlas-core/src/model/country.rs
use crate::traits::{Record, SortField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A country entry.
///
/// Field names double as the JSON wire names of the dataset file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Country {
    pub name: String,
    pub official_name: String,
    /// ISO alpha-2 or alpha-3 code; unique across the dataset.
    pub country_code: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: u64,
    /// Land area in km².
    pub area: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO codes of bordering countries, in dataset order.
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn official_name(&self) -> &str {
        &self.official_name
    }
    pub fn iso_code(&self) -> &str {
        &self.country_code
    }
    pub fn capital(&self) -> &str {
        &self.capital
    }
    pub fn region(&self) -> &str {
        &self.region
    }
    pub fn subregion(&self) -> &str {
        &self.subregion
    }
    pub fn population(&self) -> u64 {
        self.population
    }
    pub fn area(&self) -> f64 {
        self.area
    }
    pub fn languages(&self) -> &[String] {
        &self.languages
    }
    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }
}

impl Record for Country {
    type SortField = CountrySortField;

    const LABEL: &'static str = "country";

    const REQUIRED_KEYS: &'static [&'static str] = &[
        "name",
        "official_name",
        "country_code",
        "capital",
        "region",
        "subregion",
        "population",
        "area",
        "latitude",
        "longitude",
        "borders",
        "languages",
        "currencies",
    ];

    fn natural_key(&self) -> &str {
        &self.country_code
    }

    fn validate(&self) -> Result<(), String> {
        let code_len = self.country_code.chars().count();
        if !(2..=3).contains(&code_len) {
            return Err(format!(
                "country_code must be 2-3 characters, got {:?}",
                self.country_code
            ));
        }
        if !(self.area.is_finite() && self.area >= 0.0) {
            return Err(format!("area must be a non-negative number, got {}", self.area));
        }
        super::check_coordinates(self.latitude, self.longitude)
    }
}

/// Sortable fields of [`Country`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySortField {
    Name,
    OfficialName,
    CountryCode,
    Capital,
    Region,
    Subregion,
    Population,
    Area,
    Latitude,
    Longitude,
    Borders,
    Languages,
    Currencies,
}

impl SortField<Country> for CountrySortField {
    const ALL: &'static [(&'static str, Self)] = &[
        ("name", Self::Name),
        ("official_name", Self::OfficialName),
        ("country_code", Self::CountryCode),
        ("capital", Self::Capital),
        ("region", Self::Region),
        ("subregion", Self::Subregion),
        ("population", Self::Population),
        ("area", Self::Area),
        ("latitude", Self::Latitude),
        ("longitude", Self::Longitude),
        ("borders", Self::Borders),
        ("languages", Self::Languages),
        ("currencies", Self::Currencies),
    ];

    fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::OfficialName => a.official_name.cmp(&b.official_name),
            Self::CountryCode => a.country_code.cmp(&b.country_code),
            Self::Capital => a.capital.cmp(&b.capital),
            Self::Region => a.region.cmp(&b.region),
            Self::Subregion => a.subregion.cmp(&b.subregion),
            Self::Population => a.population.cmp(&b.population),
            Self::Area => a.area.total_cmp(&b.area),
            Self::Latitude => a.latitude.total_cmp(&b.latitude),
            Self::Longitude => a.longitude.total_cmp(&b.longitude),
            Self::Borders => a.borders.cmp(&b.borders),
            Self::Languages => a.languages.cmp(&b.languages),
            Self::Currencies => a.currencies.cmp(&b.currencies),
        }
    }
}
