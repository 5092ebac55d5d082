//! YAML Export functionality
//!
//! Exports ledger records to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::RecordExport;
use crate::models::Record;

/// Export records to YAML format
pub fn export_records_yaml<W: Write>(records: Vec<Record>, writer: &mut W) -> TallyResult<()> {
    let export = RecordExport::from_records(records);

    // Add a header comment
    writeln!(writer, "# tally Ledger Export")
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    fn sample_records() -> Vec<Record> {
        vec![Record::with_details(
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            "Lunch",
            vec!["Food".to_string()],
            "Cash",
            Amount::zero(),
            Amount::from_cents(4000),
            "",
        )]
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_records_yaml(sample_records(), &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        assert!(yaml_string.contains("# tally Ledger Export"));
        assert!(yaml_string.contains("Lunch"));
        assert!(yaml_string.contains("Food"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut output = Vec::new();
        export_records_yaml(sample_records(), &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        let yaml_content: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: RecordExport = serde_yaml::from_str(&yaml_content).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].item, "Lunch");
    }
}
