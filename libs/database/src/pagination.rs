//! Shared pagination primitives.
//!
//! Every listing endpoint goes through the same pair: a [`PageRequest`]
//! normalizes the raw page/sort parameters a caller sent, and a [`Page`]
//! carries the results back with the total match count. The count is
//! always computed against the same predicate as the rows (see
//! [`crate::repository::fetch_page`]).

use serde::Serialize;
use utoipa::ToSchema;

/// One page of results plus the total number of rows matching the filter,
/// ignoring paging.
///
/// Invariants: `items.len() <= lines_per_page` of the request that
/// produced it, and `total` was counted with the identical predicate.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page<T> {
    /// Total matching rows across all pages
    pub total: u64,
    /// Rows for the requested page, in sort order
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total: u64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    /// A page with no matches. Not an error: listings that match nothing
    /// return this.
    pub fn empty() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }

    /// Convert the items of a page, keeping the total.
    ///
    /// Repositories use this to map storage rows into domain records.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Sort direction, restricted to ascending/descending.
///
/// Parsed case-insensitively; anything unrecognized falls back to
/// ascending. User input never reaches the ORDER BY clause directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction, falling back to [`SortDirection::Asc`] for
    /// anything that is not "asc"/"desc" (any casing).
    pub fn parse_or_default(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[cfg(feature = "postgres")]
impl From<SortDirection> for sea_orm::Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => sea_orm::Order::Asc,
            SortDirection::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Normalized paging + sorting parameters for a listing query.
///
/// Construction clamps out-of-range values instead of rejecting them:
/// a negative page becomes 0 and a non-positive page size becomes the
/// default of 10. The sort key is kept verbatim; each repository resolves
/// it through its own column allow-list (unknown keys fall back to the
/// entity's default column there).
#[derive(Debug, Clone)]
pub struct PageRequest {
    page: u64,
    lines_per_page: u64,
    sort_by: String,
    direction: SortDirection,
}

impl PageRequest {
    pub const DEFAULT_LINES_PER_PAGE: u64 = 10;

    pub fn new(
        page: i64,
        lines_per_page: i64,
        sort_by: impl Into<String>,
        direction: &str,
    ) -> Self {
        Self {
            page: page.max(0) as u64,
            lines_per_page: if lines_per_page <= 0 {
                Self::DEFAULT_LINES_PER_PAGE
            } else {
                lines_per_page as u64
            },
            sort_by: sort_by.into(),
            direction: SortDirection::parse_or_default(direction),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn lines_per_page(&self) -> u64 {
        self.lines_per_page
    }

    /// Row offset of this page: `page * lines_per_page`.
    pub fn offset(&self) -> u64 {
        self.page * self.lines_per_page
    }

    /// Requested sort key, to be resolved through an entity allow-list.
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 0, "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_page_clamps_to_zero() {
        let request = PageRequest::new(-5, 20, "name", "asc");
        assert_eq!(request.page(), 0);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_non_positive_lines_per_page_uses_default() {
        assert_eq!(
            PageRequest::new(0, 0, "name", "asc").lines_per_page(),
            PageRequest::DEFAULT_LINES_PER_PAGE
        );
        assert_eq!(
            PageRequest::new(0, -3, "name", "asc").lines_per_page(),
            PageRequest::DEFAULT_LINES_PER_PAGE
        );
    }

    #[test]
    fn test_offset_is_page_times_lines() {
        let request = PageRequest::new(3, 25, "name", "asc");
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn test_direction_parsing_is_case_insensitive() {
        assert_eq!(SortDirection::parse_or_default("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_or_default("Desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_or_default(" desc "), SortDirection::Desc);
        assert_eq!(SortDirection::parse_or_default("asc"), SortDirection::Asc);
    }

    #[test]
    fn test_unknown_direction_falls_back_to_asc() {
        assert_eq!(SortDirection::parse_or_default("upward"), SortDirection::Asc);
        assert_eq!(SortDirection::parse_or_default(""), SortDirection::Asc);
    }

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 0);
        assert_eq!(request.lines_per_page(), 10);
        assert_eq!(request.direction(), SortDirection::Asc);
        assert_eq!(request.sort_by(), "");
    }

    #[test]
    fn test_page_map_keeps_total() {
        let page = Page::new(42, vec![1, 2, 3]);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.total, 42);
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::empty();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }
}
