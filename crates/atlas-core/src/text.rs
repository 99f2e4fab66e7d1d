// crates/atlas-core/src/text.rs

/// Normalize free text for matching.
///
/// Collapses every run of whitespace into a single space, trims both ends and
/// lowercases the result.
///
/// # Examples
/// ```rust
/// use atlas_core::text::normalize;
///
/// assert_eq!(normalize("  Republic\tof \n Indonesia "), "republic of indonesia");
/// ```
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive equality (Unicode lowercase, no whitespace folding).
#[inline]
pub fn equals_ci(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Treat `None` and the empty string the same way: "no value supplied".
#[inline]
pub fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
