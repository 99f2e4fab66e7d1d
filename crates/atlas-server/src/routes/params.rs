//! Query-string parsing shared by the list endpoints.
//!
//! Values arrive as raw strings so that trimming, empty-means-unset and the
//! error payload stay under our control instead of serde's.

use crate::error::ApiError;
use atlas_core::{PageRequest, SearchCriteria, SortOrder};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;

/// Unwrap a query extraction, turning a rejection into a 422.
pub fn accept<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query.map(|Query(q)| q).map_err(|rejection| ApiError::Validation {
        message: rejection.body_text(),
        details: json!({}),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageParams {
    pub fn request(&self) -> Result<PageRequest, ApiError> {
        let page = number::<usize>("page", &self.page)?.unwrap_or(1);
        let size = number::<usize>("size", &self.size)?.unwrap_or(PageRequest::DEFAULT_SIZE);
        Ok(PageRequest::new(page, size)?)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CountryParams {
    #[serde(flatten)]
    pub paging: PageParams,
    pub name: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub min_population: Option<String>,
    pub max_population: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl CountryParams {
    pub fn criteria(&self) -> Result<SearchCriteria, ApiError> {
        Ok(SearchCriteria {
            name: text(&self.name),
            region: text(&self.region),
            subregion: text(&self.subregion),
            min_population: number("min_population", &self.min_population)?,
            max_population: number("max_population", &self.max_population)?,
            min_area: area("min_area", &self.min_area)?,
            max_area: area("max_area", &self.max_area)?,
            language: text(&self.language),
            currency: text(&self.currency),
            sort_by: text(&self.sort_by),
            order: order(&self.order)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CapitalParams {
    #[serde(flatten)]
    pub paging: PageParams,
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl CapitalParams {
    pub fn criteria(&self) -> Result<SearchCriteria, ApiError> {
        Ok(SearchCriteria {
            name: text(&self.name),
            sort_by: text(&self.sort_by),
            order: order(&self.order)?,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

/// Trimmed value, `None` when absent or blank.
pub fn text(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

pub fn number<T: FromStr>(field: &str, raw: &Option<String>) -> Result<Option<T>, ApiError> {
    match text(raw) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| {
            ApiError::validation(field, format!("{field} must be a non-negative integer"), &value)
        }),
    }
}

fn area(field: &str, raw: &Option<String>) -> Result<Option<f64>, ApiError> {
    let Some(value) = text(raw) else {
        return Ok(None);
    };
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(ApiError::validation(
            field,
            format!("{field} must be a non-negative number"),
            &value,
        )),
    }
}

fn order(raw: &Option<String>) -> Result<SortOrder, ApiError> {
    match text(raw) {
        None => Ok(SortOrder::Asc),
        Some(value) => Ok(value.parse::<SortOrder>()?),
    }
}
