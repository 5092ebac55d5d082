//! Export module for tally
//!
//! Provides record export functionality in multiple formats:
//! - CSV: Spreadsheet-compatible record listing
//! - JSON: Machine-readable export with schema versioning
//! - YAML: Human-readable export
//!
//! Exports always cover the full filtered record set, never just the
//! displayed page.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_records_csv;
pub use json::{export_records_json, RecordExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_records_yaml;
