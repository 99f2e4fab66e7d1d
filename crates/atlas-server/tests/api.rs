use atlas_core::{Atlas, DataPaths};
use atlas_server::{app, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn bundled_app() -> Router {
    app(AppState::new(Atlas::bundled()))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let resp = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn codes(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["country_code"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(bundled_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn list_countries_wraps_page_in_envelope() {
    let (status, body) = get(bundled_app(), "/countries?page=1&size=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(
        body["meta"],
        json!({ "page": 1, "size": 4, "total_items": 6, "total_pages": 2 })
    );
}

#[tokio::test]
async fn search_alias_filters_and_sorts() {
    let (status, body) = get(
        bundled_app(),
        "/countries/search?region=%20europe%20&sort_by=population&order=desc",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(codes(&body), vec!["DE", "FR"]);
}

#[tokio::test]
async fn blank_query_values_are_ignored() {
    let (status, body) = get(bundled_app(), "/countries?name=&region=&min_population=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total_items"], 6);
}

#[tokio::test]
async fn country_by_code_is_case_insensitive() {
    let (status, body) = get(bundled_app(), "/countries/de").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Germany");
    assert_eq!(body["meta"], Value::Null);
}

#[tokio::test]
async fn unknown_country_is_404() {
    let (status, body) = get(bundled_app(), "/countries/zz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["error"]["code"], "ERR_NOT_FOUND");
    assert_eq!(body["error"]["kind"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Country with code 'zz' not found");
}

#[tokio::test]
async fn invalid_sort_field_is_400() {
    let (status, body) = get(bundled_app(), "/countries?sort_by=elevation").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "ERR_BAD_REQUEST");
    assert_eq!(body["error"]["details"], json!({ "sort_by": "elevation" }));
}

#[tokio::test]
async fn malformed_parameters_are_422() {
    for uri in [
        "/countries?page=0",
        "/countries?size=101",
        "/countries?page=abc",
        "/countries?min_population=-5",
        "/countries?max_area=-1",
        "/countries?order=sideways",
        "/capitals?size=0",
        "/statistics/top-population/largest?limit=0",
        "/statistics/top-population/largest?limit=lots",
    ] {
        let (status, body) = get(bundled_app(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["error"]["code"], "ERR_VALIDATION", "{uri}");
    }
}

#[tokio::test]
async fn category_lookups_paginate() {
    let (_, body) = get(bundled_app(), "/countries/region/Asia").await;
    assert_eq!(codes(&body), vec!["ID", "JP"]);

    let (_, body) = get(bundled_app(), "/countries/subregion/western%20europe").await;
    assert_eq!(codes(&body), vec!["FR", "DE"]);

    let (_, body) = get(bundled_app(), "/countries/language/french?size=1").await;
    assert_eq!(codes(&body), vec!["FR"]);
    assert_eq!(body["meta"]["total_pages"], 2);

    let (_, body) = get(bundled_app(), "/countries/currency/EUR").await;
    assert_eq!(codes(&body), vec!["FR", "DE"]);
}

#[tokio::test]
async fn capitals_list_and_lookup() {
    let (status, body) = get(bundled_app(), "/capitals?sort_by=population&order=desc&size=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Tokyo");
    assert_eq!(body["meta"]["total_items"], 6);

    let (status, body) = get(bundled_app(), "/capitals/%20paris").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["country"], "France");

    let (status, body) = get(bundled_app(), "/capitals/atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["details"], json!({ "name": "atlantis" }));
}

#[tokio::test]
async fn statistics_endpoints() {
    let (_, body) = get(bundled_app(), "/statistics/totals").await;
    assert_eq!(body["data"], json!({ "countries": 6, "capitals": 6 }));

    let (_, body) = get(bundled_app(), "/statistics/top-population/largest").await;
    assert_eq!(codes(&body), vec!["US", "ID", "JP", "DE", "FR"]);

    let (_, body) = get(bundled_app(), "/statistics/top-population/smallest?limit=2").await;
    assert_eq!(codes(&body), vec!["CA", "FR"]);

    let (_, body) = get(bundled_app(), "/statistics/regions").await;
    assert_eq!(body["data"], json!({ "Americas": 2, "Asia": 2, "Europe": 2 }));

    let (_, body) = get(bundled_app(), "/statistics/languages").await;
    assert_eq!(body["data"]["English"], 2);
    assert_eq!(body["data"]["French"], 2);
}

#[tokio::test]
async fn missing_dataset_is_503() {
    let dir = tempfile::tempdir().unwrap();
    let router = app(AppState::new(Atlas::open(&DataPaths::from_dir(dir.path()))));
    let (status, body) = get(router, "/countries").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "ERR_DATA_UNAVAILABLE");
    assert_eq!(body["error"]["kind"], "DATA_UNAVAILABLE");
}

#[tokio::test]
async fn malformed_dataset_is_500() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("countries.json"), b"{ not json").unwrap();
    std::fs::write(dir.path().join("capitals.json"), b"[]").unwrap();
    let router = app(AppState::new(Atlas::open(&DataPaths::from_dir(dir.path()))));
    let (status, body) = get(router, "/countries").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "ERR_SCHEMA_INVALID");
}
