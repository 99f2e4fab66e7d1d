// crates/atlas-core/src/service/country.rs
use crate::error::{AtlasError, Result};
use crate::model::Country;
use crate::pagination::{paginate, Page, PageRequest};
use crate::query::{filter_countries, stages, SearchCriteria};
use crate::repository::CountryRepository;
use serde_json::json;
use std::sync::Arc;

/// Country use cases: list with query, lookup by code, list by category.
#[derive(Debug, Clone)]
pub struct CountryService {
    repository: Arc<CountryRepository>,
}

impl CountryService {
    pub fn new(repository: Arc<CountryRepository>) -> Self {
        Self { repository }
    }

    /// Search, filter, sort and paginate the country collection.
    pub fn list_countries(&self, pagination: PageRequest, criteria: &SearchCriteria) -> Result<Page<Country>> {
        let all = self.repository.get_all()?;
        let matched = filter_countries(&all, criteria)?;
        Ok(paginate(&matched, pagination).cloned())
    }

    /// Case-insensitive lookup by ISO code.
    pub fn get_by_code(&self, code: &str) -> Result<Country> {
        self.repository.get_by_key(code)?.ok_or_else(|| {
            tracing::info!(code, "country not found");
            AtlasError::not_found(
                format!("Country with code '{code}' not found"),
                json!({ "code": code }),
            )
        })
    }

    pub fn get_by_region(&self, region: &str, pagination: PageRequest) -> Result<Page<Country>> {
        let matched = self.repository.get_by_field_exact(Country::region, region)?;
        Ok(paginate(&matched, pagination))
    }

    pub fn get_by_subregion(&self, subregion: &str, pagination: PageRequest) -> Result<Page<Country>> {
        let matched = self.repository.get_by_field_exact(Country::subregion, subregion)?;
        Ok(paginate(&matched, pagination))
    }

    /// Countries listing `language` among their languages (case-insensitive).
    pub fn get_by_language(&self, language: &str, pagination: PageRequest) -> Result<Page<Country>> {
        self.by_membership(Country::languages, language, pagination)
    }

    /// Countries listing `currency` among their currencies (case-insensitive).
    pub fn get_by_currency(&self, currency: &str, pagination: PageRequest) -> Result<Page<Country>> {
        self.by_membership(Country::currencies, currency, pagination)
    }

    fn by_membership(
        &self,
        field: fn(&Country) -> &[String],
        value: &str,
        pagination: PageRequest,
    ) -> Result<Page<Country>> {
        let all = self.repository.get_all()?;
        let matched = stages::filter_membership(all.iter().collect(), field, Some(value));
        Ok(paginate(&matched, pagination).cloned())
    }
}
