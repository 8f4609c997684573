//! Page-number pagination for listing endpoints.
//!
//! Page numbers are 1-based. An empty collection still has one (empty)
//! page, so `page=1` is always valid; any other page past the end is an
//! error rather than an empty result.

use crate::error::CoreError;

/// Page used when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// A resolved page within a collection of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageWindow {
    /// Validate the requested page against the collection size.
    pub fn resolve(page: i64, page_size: i64, total: i64) -> Result<Self, CoreError> {
        if page_size < 1 {
            return Err(CoreError::Validation(
                "page_size must be a positive integer".to_string(),
            ));
        }
        if page < 1 {
            return Err(CoreError::Validation(
                "That page number is less than 1".to_string(),
            ));
        }

        let total = total.max(0);
        let total_pages = (total / page_size + i64::from(total % page_size != 0)).max(1);
        if page > total_pages {
            return Err(CoreError::Validation(
                "That page contains no results".to_string(),
            ));
        }

        Ok(Self {
            page,
            page_size,
            total,
            total_pages,
        })
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_collection_has_one_page() {
        let w = PageWindow::resolve(1, 50, 0).unwrap();
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn partial_last_page_counts() {
        let w = PageWindow::resolve(3, 10, 21).unwrap();
        assert_eq!(w.total_pages, 3);
        assert_eq!(w.offset(), 20);
        assert_eq!(w.limit(), 10);
    }

    #[test]
    fn exact_multiple() {
        assert_eq!(PageWindow::resolve(1, 10, 20).unwrap().total_pages, 2);
    }

    #[test]
    fn page_past_end_rejected() {
        assert_matches!(
            PageWindow::resolve(2, 50, 0),
            Err(CoreError::Validation(msg)) if msg == "That page contains no results"
        );
        assert_matches!(PageWindow::resolve(4, 10, 21), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_below_one_rejected() {
        assert_matches!(
            PageWindow::resolve(0, 50, 10),
            Err(CoreError::Validation(msg)) if msg == "That page number is less than 1"
        );
    }

    #[test]
    fn zero_page_size_rejected() {
        assert_matches!(PageWindow::resolve(1, 0, 10), Err(CoreError::Validation(_)));
        assert_matches!(PageWindow::resolve(1, -5, 10), Err(CoreError::Validation(_)));
    }
}
