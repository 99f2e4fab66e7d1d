use super::params::{accept, CountryParams, PageParams};
use crate::error::ApiError;
use crate::response::{ok, paged, Envelope};
use crate::server::AppState;
use atlas_core::Country;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};

type Listing = Result<Json<Envelope<Vec<Country>>>, ApiError>;

pub fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/search", get(list_countries))
        .route("/countries/{code}", get(get_country))
        .route("/countries/region/{region}", get(by_region))
        .route("/countries/subregion/{subregion}", get(by_subregion))
        .route("/countries/language/{language}", get(by_language))
        .route("/countries/currency/{currency}", get(by_currency))
}

async fn list_countries(
    State(state): State<AppState>,
    query: Result<Query<CountryParams>, QueryRejection>,
) -> Listing {
    let params = accept(query)?;
    let criteria = params.criteria()?;
    let page = state
        .atlas
        .countries
        .list_countries(params.paging.request()?, &criteria)?;
    Ok(paged(page))
}

async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Envelope<Country>>, ApiError> {
    let country = state.atlas.countries.get_by_code(code.trim())?;
    Ok(ok(country))
}

async fn by_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Listing {
    let paging = accept(query)?.request()?;
    Ok(paged(state.atlas.countries.get_by_region(region.trim(), paging)?))
}

async fn by_subregion(
    State(state): State<AppState>,
    Path(subregion): Path<String>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Listing {
    let paging = accept(query)?.request()?;
    Ok(paged(
        state
            .atlas
            .countries
            .get_by_subregion(subregion.trim(), paging)?,
    ))
}

async fn by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Listing {
    let paging = accept(query)?.request()?;
    Ok(paged(
        state
            .atlas
            .countries
            .get_by_language(language.trim(), paging)?,
    ))
}

async fn by_currency(
    State(state): State<AppState>,
    Path(currency): Path<String>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Listing {
    let paging = accept(query)?.request()?;
    Ok(paged(
        state
            .atlas
            .countries
            .get_by_currency(currency.trim(), paging)?,
    ))
}
