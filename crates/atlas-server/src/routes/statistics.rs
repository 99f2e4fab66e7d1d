use super::params::{accept, number, LimitParams};
use crate::error::ApiError;
use crate::response::{ok, Envelope};
use crate::server::AppState;
use atlas_core::{Country, DbStats, SortOrder, StatisticsService};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use std::collections::BTreeMap;

type Distribution = Result<Json<Envelope<BTreeMap<String, usize>>>, ApiError>;

pub fn statistics_routes() -> Router<AppState> {
    Router::new()
        .route("/statistics/totals", get(totals))
        .route("/statistics/top-population/largest", get(largest))
        .route("/statistics/top-population/smallest", get(smallest))
        .route("/statistics/regions", get(regions))
        .route("/statistics/languages", get(languages))
}

async fn totals(State(state): State<AppState>) -> Result<Json<Envelope<DbStats>>, ApiError> {
    Ok(ok(state.atlas.statistics.totals()?))
}

async fn largest(
    State(state): State<AppState>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Country>>>, ApiError> {
    top(&state, query, SortOrder::Desc)
}

async fn smallest(
    State(state): State<AppState>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<Country>>>, ApiError> {
    top(&state, query, SortOrder::Asc)
}

fn top(
    state: &AppState,
    query: Result<Query<LimitParams>, QueryRejection>,
    order: SortOrder,
) -> Result<Json<Envelope<Vec<Country>>>, ApiError> {
    let params = accept(query)?;
    let limit = number::<i64>("limit", &params.limit)?.unwrap_or(StatisticsService::DEFAULT_TOP_LIMIT);
    Ok(ok(state.atlas.statistics.top_by_population(limit, order)?))
}

async fn regions(State(state): State<AppState>) -> Distribution {
    Ok(ok(state.atlas.statistics.region_distribution()?))
}

async fn languages(State(state): State<AppState>) -> Distribution {
    Ok(ok(state.atlas.statistics.language_distribution()?))
}
