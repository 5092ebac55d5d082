//! JSON Export functionality
//!
//! Exports ledger records to JSON format with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::Record;
use crate::query::{aggregate, Totals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Record export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported records
    pub record_count: usize,

    /// Totals over the exported set
    pub totals: Totals,

    /// The exported records
    pub records: Vec<Record>,
}

impl RecordExport {
    /// Create an export from a record set
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count: records.len(),
            totals: aggregate(&records),
            records,
        }
    }

}

/// Export records to JSON
pub fn export_records_json<W: Write>(
    records: Vec<Record>,
    writer: &mut W,
    pretty: bool,
) -> TallyResult<()> {
    let export = RecordExport::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
