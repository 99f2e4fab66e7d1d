// crates/atlas-core/src/repository.rs
use crate::error::{AtlasError, Result};
use crate::loader::{DatasetCache, RawDataset};
use crate::model::{Capital, Country};
use crate::query::{stages, SortOrder};
use crate::text::equals_ci;
use crate::traits::{Record, SortField};
use once_cell::sync::OnceCell;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Data access for one record type backed by one JSON dataset.
///
/// Raw objects come from the shared [`DatasetCache`]; the typed snapshot is
/// built on the first successful [`Repository::get_all`] and reused after.
#[derive(Debug)]
pub struct Repository<T: Record> {
    path: PathBuf,
    cache: Arc<DatasetCache>,
    records: OnceCell<Arc<Vec<T>>>,
}

pub type CountryRepository = Repository<Country>;
pub type CapitalRepository = Repository<Capital>;

impl<T: Record> Repository<T> {
    pub fn new(path: impl Into<PathBuf>, cache: Arc<DatasetCache>) -> Self {
        Self {
            path: path.into(),
            cache,
            records: OnceCell::new(),
        }
    }

    /// The whole collection, in dataset order.
    pub fn get_all(&self) -> Result<Arc<Vec<T>>> {
        self.records
            .get_or_try_init(|| {
                let raw = self.cache.load(&self.path, T::REQUIRED_KEYS).map_err(|e| {
                    tracing::error!(path = %self.path.display(), error = %e, "failed to load {} data", T::LABEL);
                    e
                })?;
                materialize::<T>(&raw).map(Arc::new)
            })
            .cloned()
    }

    /// Case-insensitive exact match on the natural key.
    pub fn get_by_key(&self, key: &str) -> Result<Option<T>> {
        let all = self.get_all()?;
        Ok(all.iter().find(|r| equals_ci(r.natural_key(), key)).cloned())
    }

    /// Case-insensitive exact match on a string field.
    pub fn get_by_field_exact(&self, field: fn(&T) -> &str, value: &str) -> Result<Vec<T>> {
        let all = self.get_all()?;
        Ok(all
            .iter()
            .filter(|r| equals_ci(field(r), value))
            .cloned()
            .collect())
    }

    /// Stable sort of `records` by the named field.
    pub fn sort<'a>(&self, records: Vec<&'a T>, field: &str, descending: bool) -> Result<Vec<&'a T>> {
        let field = T::SortField::parse(field)?;
        let order = if descending { SortOrder::Desc } else { SortOrder::Asc };
        Ok(stages::sort_records(records, field, order))
    }
}

fn materialize<T: Record>(raw: &RawDataset) -> Result<Vec<T>> {
    let records: Vec<T> = raw
        .iter()
        .map(|obj| {
            let invalid = |reason: String| {
                tracing::error!(reason = %reason, "invalid {} dataset", T::LABEL);
                AtlasError::schema_with(
                    format!("Invalid {} dataset", T::LABEL),
                    json!({ "error": reason, "record": obj }),
                )
            };
            let record: T = serde_json::from_value(Value::Object(obj.clone()))
                .map_err(|e| invalid(e.to_string()))?;
            record.validate().map_err(invalid)?;
            Ok(record)
        })
        .collect::<Result<_>>()?;
    ensure_unique_keys(&records)?;
    Ok(records)
}

/// Natural keys are compared case-insensitively, like every lookup on them.
fn ensure_unique_keys<T: Record>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let key = record.natural_key();
        if !seen.insert(key.to_lowercase()) {
            tracing::error!(key, "duplicate {} key", T::LABEL);
            return Err(AtlasError::schema_with(
                format!("Invalid {} dataset", T::LABEL),
                json!({ "error": format!("duplicate key '{key}'"), "duplicate": key }),
            ));
        }
    }
    Ok(())
}
