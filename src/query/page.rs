//! Page-window computation over an ordered record list

use crate::models::Record;

/// A requested page window: 1-based page index plus page size
///
/// Contract: changing the page size invalidates the current page index;
/// callers must re-request page 1 after a size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Create a page request; a zero page size is raised to 1
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: page_size.max(1),
        }
    }

    /// The first page for the given size
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(10)
    }
}

/// One page of an ordered record list
#[derive(Debug, Clone)]
pub struct RecordPage {
    /// The records on this page, at most `page_size` of them
    pub items: Vec<Record>,
    /// The page index actually served, clamped to `[1, total_pages]`
    pub page: usize,
    /// Total page count, at least 1 even for an empty list
    pub total_pages: usize,
    /// Size of the ordered list the page was cut from
    pub total_records: usize,
}

/// Slice one page out of an ordered record list
///
/// An out-of-range page index is clamped rather than rejected, so paging past
/// the end after a filter change lands on the last page.
pub fn paginate(ordered: Vec<Record>, request: PageRequest) -> RecordPage {
    let total_records = ordered.len();
    let page_size = request.page_size.max(1);
    let total_pages = ((total_records + page_size - 1) / page_size).max(1);
    let page = request.page.clamp(1, total_pages);

    let items = ordered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    RecordPage {
        items,
        page,
        total_pages,
        total_records,
    }
}
