use atlas_core::{AtlasError, ErrorKind};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Startup failures of the server binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A failed request. Core errors pass through untouched; query strings that
/// do not parse become `Validation`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] AtlasError),

    #[error("{message}")]
    Validation { message: String, details: Value },
}

impl ApiError {
    pub fn validation(field: &str, message: impl Into<String>, value: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: json!({ "field": field, "value": value }),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Core(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::InvalidSortField => StatusCode::BAD_REQUEST,
                ErrorKind::InvalidArgument => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::SchemaInvalid => StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::DataUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "ERR_VALIDATION",
            ApiError::Core(e) => match e.kind() {
                ErrorKind::NotFound => "ERR_NOT_FOUND",
                ErrorKind::InvalidSortField => "ERR_BAD_REQUEST",
                ErrorKind::InvalidArgument => "ERR_VALIDATION",
                ErrorKind::SchemaInvalid => "ERR_SCHEMA_INVALID",
                ErrorKind::DataUnavailable => "ERR_DATA_UNAVAILABLE",
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION",
            ApiError::Core(e) => e.kind().as_str(),
        }
    }

    fn details(&self) -> Value {
        match self {
            ApiError::Validation { details, .. } => details.clone(),
            ApiError::Core(e) => e.detail().unwrap_or(Value::Null),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "request rejected");
        }

        let body = Json(json!({
            "status": "error",
            "data": null,
            "meta": null,
            "error": {
                "code": self.code(),
                "kind": self.kind(),
                "message": self.to_string(),
                "details": self.details(),
            },
        }));
        let mut resp = (status, body).into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            resp.headers_mut()
                .insert("retry-after", HeaderValue::from_static("3"));
        }
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::PageRequest;

    #[test]
    fn invalid_argument_maps_to_422() {
        let err = ApiError::from(PageRequest::new(0, 10).unwrap_err());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "ERR_VALIDATION");
        assert_eq!(err.kind(), "INVALID_ARGUMENT");
    }

    #[test]
    fn validation_carries_field_and_value() {
        let err = ApiError::validation("page", "page must be an integer", "abc");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.details(), json!({ "field": "page", "value": "abc" }));
    }
}
