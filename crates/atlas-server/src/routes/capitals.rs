use super::params::{accept, CapitalParams};
use crate::error::ApiError;
use crate::response::{ok, paged, Envelope};
use crate::server::AppState;
use atlas_core::Capital;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};

pub fn capital_routes() -> Router<AppState> {
    Router::new()
        .route("/capitals", get(list_capitals))
        .route("/capitals/{name}", get(get_capital))
}

async fn list_capitals(
    State(state): State<AppState>,
    query: Result<Query<CapitalParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Capital>>>, ApiError> {
    let params = accept(query)?;
    let criteria = params.criteria()?;
    let page = state
        .atlas
        .capitals
        .list_capitals(params.paging.request()?, &criteria)?;
    Ok(paged(page))
}

async fn get_capital(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Envelope<Capital>>, ApiError> {
    Ok(ok(state.atlas.capitals.get_by_name(name.trim())?))
}
