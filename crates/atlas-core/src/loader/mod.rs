// crates/atlas-core/src/loader/mod.rs

//! # Dataset Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and the structural
//! checks on a dataset: the file must hold a JSON array of objects and every
//! object must carry the record type's required keys.
//!
//! Successful loads are memoized per path inside a [`DatasetCache`]. There is
//! no eviction and no invalidation; the files are static for the life of the
//! cache.

use crate::error::{AtlasError, Result};
use once_cell::sync::OnceCell;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

pub mod common_io;

/// A validated dataset: one JSON object per record.
pub type RawDataset = Vec<Map<String, Value>>;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const CAPITALS_FILE: &str = "capitals.json";

/// Directory holding the datasets shipped with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Locations of the two backing dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub countries: PathBuf,
    pub capitals: PathBuf,
}

impl DataPaths {
    /// `countries.json` and `capitals.json` inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            countries: dir.join(COUNTRIES_FILE),
            capitals: dir.join(CAPITALS_FILE),
        }
    }

    /// The bundled datasets under [`default_data_dir`].
    pub fn bundled() -> Self {
        Self::from_dir(default_data_dir())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Memoizes parsed datasets keyed by file path.
///
/// First successful load wins; later calls with the same path return the same
/// `Arc` without touching the filesystem. Failed loads are not cached. Each
/// path gets its own `OnceCell`, so concurrent first calls for one path read
/// the file once and callers for other paths are not blocked.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<OnceCell<Arc<RawDataset>>>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate the dataset at `path`, or return the cached snapshot.
    ///
    /// `required_keys` only matters on the first successful call for a path.
    pub fn load(&self, path: &Path, required_keys: &[&str]) -> Result<Arc<RawDataset>> {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(entries.entry(path.to_path_buf()).or_default())
        };

        cell.get_or_try_init(|| {
            let data = load_from_disk(path, required_keys)?;
            tracing::debug!(path = %path.display(), records = data.len(), "dataset cached");
            Ok::<_, AtlasError>(Arc::new(data))
        })
        .cloned()
    }

    /// `true` once `path` has been loaded successfully.
    pub fn is_cached(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(path).is_some_and(|cell| cell.get().is_some())
    }
}

fn load_from_disk(path: &Path, required_keys: &[&str]) -> Result<RawDataset> {
    let bytes = common_io::read_all(path)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
        AtlasError::schema_with(
            format!("Malformed JSON in dataset: {}", path.display()),
            json!({ "error": e.to_string() }),
        )
    })?;
    validate_shape(value, required_keys)
}

/// Structural validation: array of objects, each carrying `required_keys`.
pub fn validate_shape(value: Value, required_keys: &[&str]) -> Result<RawDataset> {
    let Value::Array(items) = value else {
        return Err(AtlasError::schema("Dataset must be a list of objects"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(obj) = item else {
                return Err(AtlasError::schema_with(
                    "Each dataset item must be an object",
                    json!({ "index": index }),
                ));
            };
            let missing: Vec<&str> = required_keys
                .iter()
                .copied()
                .filter(|k| !obj.contains_key(*k))
                .collect();
            if !missing.is_empty() {
                return Err(AtlasError::schema_with(
                    format!("Dataset item missing keys: {}", missing.join(", ")),
                    json!({ "index": index, "missing": missing }),
                ));
            }
            Ok(obj)
        })
        .collect()
}
