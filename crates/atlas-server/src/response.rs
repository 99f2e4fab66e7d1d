use atlas_core::{Page, PageMeta};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub data: T,
    pub meta: Option<PageMeta>,
    pub error: Option<Value>,
}

pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        status: "success",
        data,
        meta: None,
        error: None,
    })
}

pub fn paged<T: Serialize>(page: Page<T>) -> Json<Envelope<Vec<T>>> {
    let (items, meta) = page.into_parts();
    Json(Envelope {
        status: "success",
        data: items,
        meta: Some(meta),
        error: None,
    })
}
