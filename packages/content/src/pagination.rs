//! Page-number pagination over in-memory collections.
//!
//! Listings are fetched whole from the backend and paged locally.
//!
//! # Usage
//!
//! ```rust
//! use content::pagination::{paginate, PageRequest};
//!
//! let items: Vec<u32> = (1..=12).collect();
//! let page = paginate(items, &PageRequest::new(3, 5).validate());
//!
//! assert_eq!(page.items, vec![11, 12]);
//! assert!(!page.page_info.has_next_page);
//! ```

use serde::{Deserialize, Serialize};

/// Default page size for post grids.
pub const DEFAULT_PER_PAGE: usize = 12;

/// Upper bound on page size.
pub const MAX_PER_PAGE: usize = 100;

/// Rows per page in the backoffice author table.
pub const AUTHOR_TABLE_PER_PAGE: usize = 5;

// ============================================================================
// Request
// ============================================================================

/// Requested page, 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    pub fn first(per_page: usize) -> Self {
        Self::new(1, per_page)
    }

    /// Apply defaults (page 1, 12 per page) and bounds (page >= 1, 1..=100 per page).
    pub fn validate(&self) -> ValidatedPageRequest {
        ValidatedPageRequest {
            page: self.page.unwrap_or(1).max(1),
            per_page: self
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

/// Normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl ValidatedPageRequest {
    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

// ============================================================================
// PageInfo
// ============================================================================

/// Position of a page within the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageInfo {
    pub fn new(request: &ValidatedPageRequest, total_items: usize) -> Self {
        let total_pages = total_items.div_ceil(request.per_page);
        PageInfo {
            current_page: request.page,
            per_page: request.per_page,
            total_items,
            total_pages,
            has_next_page: request.page < total_pages,
            has_previous_page: request.page > 1,
        }
    }
}

/// One page of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}

/// Slice one page out of `items`. Pages past the end are empty, not errors.
pub fn paginate<T>(items: Vec<T>, request: &ValidatedPageRequest) -> Page<T> {
    let page_info = PageInfo::new(request, items.len());
    let items = items
        .into_iter()
        .skip(request.offset())
        .take(request.per_page)
        .collect();
    Page { items, page_info }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        let validated = PageRequest::default().validate();
        assert_eq!(validated.page, 1);
        assert_eq!(validated.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_validate_clamps() {
        let validated = PageRequest::new(0, 500).validate();
        assert_eq!(validated.page, 1);
        assert_eq!(validated.per_page, MAX_PER_PAGE);

        let validated = PageRequest::new(2, 0).validate();
        assert_eq!(validated.per_page, 1);
    }

    #[test]
    fn test_first_page() {
        let items: Vec<i32> = (1..=12).collect();
        let page = paginate(items, &PageRequest::first(5).validate());
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(page.page_info.total_pages, 3);
        assert!(page.page_info.has_next_page);
        assert!(!page.page_info.has_previous_page);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<i32> = (1..=12).collect();
        let page = paginate(items, &PageRequest::new(3, 5).validate());
        assert_eq!(page.items, vec![11, 12]);
        assert!(!page.page_info.has_next_page);
        assert!(page.page_info.has_previous_page);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<i32> = (1..=3).collect();
        let page = paginate(items, &PageRequest::new(9, 5).validate());
        assert!(page.is_empty());
        assert_eq!(page.page_info.total_items, 3);
        assert!(!page.page_info.has_next_page);
    }

    #[test]
    fn test_empty_collection() {
        let page = paginate(Vec::<i32>::new(), &PageRequest::default().validate());
        assert_eq!(page.page_info.total_pages, 0);
        assert!(!page.page_info.has_next_page);
    }

    #[test]
    fn test_map_keeps_page_info() {
        let page = paginate(vec![1, 2, 3], &PageRequest::first(2).validate()).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page_info.total_pages, 2);
    }
}
