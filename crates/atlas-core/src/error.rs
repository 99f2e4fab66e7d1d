// crates/atlas-core/src/error.rs
use serde_json::{json, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Every failure the core can report.
///
/// Errors are raised where they are detected and travel unchanged up to the
/// service boundary. Each variant maps to exactly one [`ErrorKind`], which is
/// what outer layers (CLI, HTTP) should switch on.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The backing dataset file is missing or cannot be read.
    #[error("Data file not found: {}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, wrong top-level shape, missing keys or a record that
    /// fails field validation.
    #[error("{message}")]
    SchemaInvalid {
        message: String,
        detail: Option<Value>,
    },

    /// A lookup by natural key found nothing.
    #[error("{message}")]
    NotFound { message: String, detail: Value },

    /// The requested sort field is not a sortable attribute of the record.
    #[error("Invalid sort field: {field}")]
    InvalidSortField { field: String },

    /// A use-case precondition was violated (e.g. a non-positive limit).
    #[error("{message}")]
    InvalidArgument { message: String, detail: Value },
}

/// Stable, copyable identifier for an [`AtlasError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DataUnavailable,
    SchemaInvalid,
    NotFound,
    InvalidSortField,
    InvalidArgument,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::DataUnavailable => "DATA_UNAVAILABLE",
            ErrorKind::SchemaInvalid => "SCHEMA_INVALID",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidSortField => "INVALID_SORT_FIELD",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AtlasError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AtlasError::DataUnavailable { .. } => ErrorKind::DataUnavailable,
            AtlasError::SchemaInvalid { .. } => ErrorKind::SchemaInvalid,
            AtlasError::NotFound { .. } => ErrorKind::NotFound,
            AtlasError::InvalidSortField { .. } => ErrorKind::InvalidSortField,
            AtlasError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Structured payload attached to the error, if any.
    pub fn detail(&self) -> Option<Value> {
        match self {
            AtlasError::DataUnavailable { path, source } => Some(json!({
                "path": path.display().to_string(),
                "error": source.to_string(),
            })),
            AtlasError::SchemaInvalid { detail, .. } => detail.clone(),
            AtlasError::NotFound { detail, .. } => Some(detail.clone()),
            AtlasError::InvalidSortField { field } => Some(json!({ "sort_by": field })),
            AtlasError::InvalidArgument { detail, .. } => Some(detail.clone()),
        }
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        AtlasError::SchemaInvalid {
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn schema_with(message: impl Into<String>, detail: Value) -> Self {
        AtlasError::SchemaInvalid {
            message: message.into(),
            detail: Some(detail),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>, detail: Value) -> Self {
        AtlasError::NotFound {
            message: message.into(),
            detail,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>, detail: Value) -> Self {
        AtlasError::InvalidArgument {
            message: message.into(),
            detail,
        }
    }
}
