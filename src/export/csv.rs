//! CSV Export functionality
//!
//! Exports ledger records to CSV format for spreadsheet use.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, Record};

/// Export records to CSV
///
/// The caller supplies the record set, so any filter has already been
/// applied; the export always covers the whole filtered set, never a
/// display page.
pub fn export_records_csv<W: Write>(records: &[Record], writer: W) -> TallyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Date",
            "Item",
            "Categories",
            "Method",
            "Income",
            "Expense",
            "Note",
            "Created At",
        ])
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for record in records {
        csv_writer
            .write_record([
                record.date_string(),
                record.item.clone(),
                record.categories.labels().join("; "),
                record.method.clone(),
                csv_amount(record.income),
                csv_amount(record.expense),
                record.note.clone(),
                record
                    .created_at
                    .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
            ])
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

/// Two-decimal amount without thousands grouping, e.g. "1050.25"
fn csv_amount(amount: Amount) -> String {
    format!("{}.{:02}", amount.units(), amount.cents_part())
}
