//! CLI commands for data export
//!
//! Exports the filtered record set in various formats. The same filter
//! options as the list view apply, and the export always covers every
//! matching record, not just one display page.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{TallyError, TallyResult};
use crate::export::{csv, json, yaml};
use crate::services::RecordService;
use crate::storage::Storage;

use super::record::FilterArgs;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export records to CSV
    Csv {
        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export records to JSON
    Json {
        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export records to YAML
    Yaml {
        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TallyResult<()> {
    let service = RecordService::new(storage);

    match cmd {
        ExportCommands::Csv { output, filters } => {
            let records = service.list(&filters.to_filter()?)?;
            let count = records.len();

            let mut writer = create_output_file(&output)?;
            csv::export_records_csv(&records, &mut writer)?;

            println!("Exported {} records to: {}", count, output.display());
        }

        ExportCommands::Json {
            output,
            filters,
            pretty,
        } => {
            let records = service.list(&filters.to_filter()?)?;
            let count = records.len();

            let mut writer = create_output_file(&output)?;
            json::export_records_json(records, &mut writer, pretty)?;

            println!("Exported {} records to: {}", count, output.display());
        }

        ExportCommands::Yaml { output, filters } => {
            let records = service.list(&filters.to_filter()?)?;
            let count = records.len();

            let mut writer = create_output_file(&output)?;
            yaml::export_records_yaml(records, &mut writer)?;

            println!("Exported {} records to: {}", count, output.display());
        }
    }

    Ok(())
}

fn create_output_file(output: &PathBuf) -> TallyResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        TallyError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
