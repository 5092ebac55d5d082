//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and totals for terminal display.

pub mod record;
pub mod summary;

pub use record::{format_record_details, format_record_table};
pub use summary::format_totals;
