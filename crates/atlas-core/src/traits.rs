// crates/atlas-core/src/traits.rs
use crate::error::{AtlasError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;

/// A typed record held in a dataset snapshot.
///
/// Both [`Country`](crate::Country) and [`Capital`](crate::Capital) implement
/// this trait, which is what lets [`Repository`](crate::Repository) and the
/// query stages stay generic over the record type.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The closed set of fields this record can be sorted by.
    type SortField: SortField<Self>;

    /// Human label used in messages ("country", "capital").
    const LABEL: &'static str;

    /// Keys every raw JSON object must carry before typed conversion.
    const REQUIRED_KEYS: &'static [&'static str];

    /// The field that uniquely identifies the record within its collection.
    fn natural_key(&self) -> &str;

    /// Range checks that the type system cannot express.
    ///
    /// Returns a short reason on failure; the repository wraps it into
    /// [`AtlasError::SchemaInvalid`].
    fn validate(&self) -> std::result::Result<(), String>;
}

/// An enumerated, typed sort key for a record.
///
/// Lookup is by exact field name against [`SortField::ALL`]; anything not
/// listed is rejected with [`AtlasError::InvalidSortField`].
pub trait SortField<R>: Copy + Sized + 'static {
    /// Every sortable field, paired with its wire name.
    const ALL: &'static [(&'static str, Self)];

    /// Natural ordering of two records on this field.
    fn compare(self, a: &R, b: &R) -> Ordering;

    /// Resolve a field name, failing with `InvalidSortField`.
    fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
            .ok_or_else(|| AtlasError::InvalidSortField {
                field: name.to_string(),
            })
    }
}
