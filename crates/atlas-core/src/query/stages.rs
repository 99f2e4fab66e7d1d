// crates/atlas-core/src/query/stages.rs

//! Individual filter stages. Every stage is pure and treats an absent (or
//! empty) filter value as identity.

use super::SortOrder;
use crate::error::Result;
use crate::text::{equals_ci, normalize, supplied};
use crate::traits::{Record, SortField};
use std::collections::HashSet;

/// Keep records whose normalized `field` contains the normalized `term`.
pub fn text_search<'a, T>(items: &[&'a T], field: fn(&T) -> &str, term: Option<&str>) -> Vec<&'a T> {
    let Some(term) = supplied(term) else {
        return items.to_vec();
    };
    let q = normalize(term);
    items
        .iter()
        .copied()
        .filter(|r| normalize(field(r)).contains(&q))
        .collect()
}

/// Union of [`text_search`] over several fields.
///
/// Results are deduplicated by natural key, in first-seen order: all matches
/// of the first field, then new matches of the second, and so on.
pub fn union_search<'a, T: Record>(
    items: &[&'a T],
    fields: &[fn(&T) -> &str],
    term: Option<&str>,
) -> Vec<&'a T> {
    if supplied(term).is_none() {
        return items.to_vec();
    }
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut out = Vec::new();
    for field in fields {
        for record in text_search(items, *field, term) {
            if seen.insert(record.natural_key()) {
                out.push(record);
            }
        }
    }
    out
}

/// Case-insensitive exact equality on a categorical field.
pub fn filter_exact<'a, T>(items: Vec<&'a T>, field: fn(&T) -> &str, value: Option<&str>) -> Vec<&'a T> {
    match supplied(value) {
        None => items,
        Some(v) => items.into_iter().filter(|r| equals_ci(field(r), v)).collect(),
    }
}

/// Inclusive numeric bounds. `min > max` simply yields nothing.
pub fn filter_range<'a, T, N>(items: Vec<&'a T>, field: fn(&T) -> N, min: Option<N>, max: Option<N>) -> Vec<&'a T>
where
    N: PartialOrd + Copy,
{
    if min.is_none() && max.is_none() {
        return items;
    }
    items
        .into_iter()
        .filter(|r| {
            let value = field(r);
            min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
        })
        .collect()
}

/// Case-insensitive membership in a list field.
pub fn filter_membership<'a, T>(
    items: Vec<&'a T>,
    field: fn(&T) -> &[String],
    value: Option<&str>,
) -> Vec<&'a T> {
    match supplied(value) {
        None => items,
        Some(v) => items
            .into_iter()
            .filter(|r| field(r).iter().any(|x| equals_ci(x, v)))
            .collect(),
    }
}

/// Stable sort; ties keep their prior relative order in both directions.
pub fn sort_records<'a, T: Record>(mut items: Vec<&'a T>, field: T::SortField, order: SortOrder) -> Vec<&'a T> {
    match order {
        SortOrder::Asc => items.sort_by(|a, b| field.compare(a, b)),
        SortOrder::Desc => items.sort_by(|a, b| field.compare(b, a)),
    }
    items
}

/// Sort by a field name when one is supplied; unknown names are rejected.
pub fn sort_by_name<'a, T: Record>(items: Vec<&'a T>, sort_by: Option<&str>, order: SortOrder) -> Result<Vec<&'a T>> {
    let Some(name) = supplied(sort_by) else {
        return Ok(items);
    };
    let field = T::SortField::parse(name).map_err(|e| {
        tracing::warn!(sort_by = name, "invalid {} sort field", T::LABEL);
        e
    })?;
    Ok(sort_records(items, field, order))
}
