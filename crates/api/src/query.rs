//! Query parameter types for listing endpoints.

use serde::Deserialize;
use trainerhub_core::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Page-number pagination parameters (`?page=&page_size=`).
///
/// Validation against the collection size happens in
/// [`PageWindow::resolve`](trainerhub_core::pagination::PageWindow::resolve).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
