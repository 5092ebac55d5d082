//! Record query pipeline
//!
//! The pure, stateless core of the application: given the full in-memory
//! record set and a filter, produce the filtered subset, one display page of
//! it, and summary totals over the whole filtered subset.
//!
//! The pipeline holds no state between runs and performs no I/O; it is re-run
//! from scratch over the latest snapshot on every user interaction. Totals
//! always cover the filtered set, not just the visible page, and the export
//! path consumes the filtered, unpaginated set directly.

pub mod filter;
pub mod order;
pub mod page;
pub mod totals;

pub use filter::RecordFilter;
pub use order::sort_newest_first;
pub use page::{paginate, PageRequest, RecordPage};
pub use totals::{aggregate, Totals};

use crate::models::Record;

/// The result of one pipeline run: a display page plus filter-wide totals
#[derive(Debug, Clone)]
pub struct QueryOutput {
    pub page: RecordPage,
    pub totals: Totals,
}

/// Run the full pipeline: filter, sort, paginate, aggregate
pub fn run(records: &[Record], filter: &RecordFilter, request: PageRequest) -> QueryOutput {
    let matched = filter.apply(records);
    let totals = aggregate(&matched);

    let mut ordered = matched;
    sort_newest_first(&mut ordered);

    QueryOutput {
        page: paginate(ordered, request),
        totals,
    }
}

/// Filter and sort without paginating, for export and full listings
pub fn matched_sorted(records: &[Record], filter: &RecordFilter) -> Vec<Record> {
    let mut matched = filter.apply(records);
    sort_newest_first(&mut matched);
    matched
}
