// crates/atlas-core/src/pagination.rs
use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Requested page. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub const DEFAULT_SIZE: usize = 10;
    pub const MAX_SIZE: usize = 100;

    /// Checked constructor: `page >= 1` and `1 <= size <= 100`.
    pub fn new(page: usize, size: usize) -> Result<Self> {
        if page < 1 {
            return Err(AtlasError::invalid_argument(
                "page must be >= 1",
                json!({ "page": page }),
            ));
        }
        if !(1..=Self::MAX_SIZE).contains(&size) {
            return Err(AtlasError::invalid_argument(
                format!("size must be between 1 and {}", Self::MAX_SIZE),
                json!({ "size": size }),
            ));
        }
        Ok(Self { page, size })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Pagination metadata returned alongside a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: usize,
    pub size: usize,
    /// Matches after filtering, before slicing.
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageMeta {
    pub fn from_counts(page: usize, size: usize, total_items: usize) -> Self {
        let total_pages = if size == 0 { 0 } else { total_items.div_ceil(size) };
        Self {
            page,
            size,
            total_items,
            total_pages,
        }
    }
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn into_parts(self) -> (Vec<T>, PageMeta) {
        (self.items, self.meta)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

impl<T: Clone> Page<&T> {
    pub fn cloned(self) -> Page<T> {
        self.map(T::clone)
    }
}

/// Slice `items` into the requested page.
///
/// Pages past the end are empty, never an error. Request validity is the
/// caller's concern; this function only guarantees it will not panic.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let start = request.page.saturating_sub(1).saturating_mul(request.size);
    let page_items = items.iter().skip(start).take(request.size).cloned().collect();
    Page {
        items: page_items,
        meta: PageMeta::from_counts(request.page, request.size, items.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_requested_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, PageRequest::new(3, 10).unwrap());
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(
            page.meta,
            PageMeta {
                page: 3,
                size: 10,
                total_items: 25,
                total_pages: 3
            }
        );
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = vec!["a", "b"];
        let page = paginate(&items, PageRequest::new(2, 2).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_items, 2);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn zero_size_does_not_divide() {
        assert_eq!(PageMeta::from_counts(1, 0, 12).total_pages, 0);
        let page = paginate(&[1, 2, 3], PageRequest { page: 1, size: 0 });
        assert!(page.items.is_empty());
    }

    #[test]
    fn request_bounds_are_checked() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
        assert!(PageRequest::new(1, 100).is_ok());
    }
}
