//! Record CLI commands
//!
//! Implements CLI commands for ledger record management and the
//! filtered summary view.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_record_details, format_record_table, format_totals};
use crate::error::{TallyError, TallyResult};
use crate::models::Amount;
use crate::query::{PageRequest, RecordFilter};
use crate::services::{CreateRecordInput, RecordService, UpdateRecordInput};
use crate::storage::Storage;

/// Filter options shared by list, summary, and export commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by month (YYYY-MM)
    #[arg(long)]
    pub month: Option<String>,

    /// Filter by category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by payment method
    #[arg(short, long)]
    pub method: Option<String>,

    /// Free-text search over item, note, categories, method, and amounts
    #[arg(short = 's', long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Build a record filter, validating the month format
    pub fn to_filter(&self) -> TallyResult<RecordFilter> {
        let mut filter = RecordFilter::new();
        if let Some(month) = &self.month {
            let month = month.trim();
            if !month.is_empty() {
                let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
                    .map_err(|_| {
                        TallyError::Validation(format!(
                            "Invalid month format: '{}'. Use YYYY-MM",
                            month
                        ))
                    })?;
                // Reformat to the zero-padded form the ISO date strings use
                filter = filter.month(first.format("%Y-%m").to_string());
            }
        }
        if let Some(category) = &self.category {
            filter = filter.category(category);
        }
        if let Some(method) = &self.method {
            filter = filter.method(method);
        }
        if let Some(search) = &self.search {
            filter = filter.text(search);
        }

        Ok(filter)
    }
}

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Add a new record
    Add {
        /// What the entry was
        item: String,

        /// Category (repeat for multiple categories)
        #[arg(short, long, required = true)]
        category: Vec<String>,

        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Payment method
        #[arg(short, long)]
        method: Option<String>,

        /// Income amount (e.g., "1,050.25")
        #[arg(short, long, conflicts_with = "expense")]
        income: Option<String>,

        /// Expense amount (e.g., "40.50")
        #[arg(short, long)]
        expense: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List records, newest first
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page number to display
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show record details
    Show {
        /// Record ID
        id: String,
    },
    /// Edit a record
    Edit {
        /// Record ID
        id: String,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New item label
        #[arg(long)]
        item: Option<String>,

        /// Replace the categories (repeat for multiple)
        #[arg(short, long)]
        category: Vec<String>,

        /// New payment method
        #[arg(short, long)]
        method: Option<String>,

        /// New income amount (clears any expense)
        #[arg(short, long, conflicts_with = "expense")]
        income: Option<String>,

        /// New expense amount (clears any income)
        #[arg(short, long)]
        expense: Option<String>,

        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a record command
pub fn handle_record_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> TallyResult<()> {
    let service = RecordService::new(storage);

    match cmd {
        RecordCommands::Add {
            item,
            category,
            date,
            method,
            income,
            expense,
            note,
        } => {
            let date = date.map(|d| parse_date(&d)).transpose()?;
            let income = income.map(|a| parse_amount(&a)).transpose()?;
            let expense = expense.map(|a| parse_amount(&a)).transpose()?;

            let input = CreateRecordInput {
                date,
                item,
                categories: category,
                method: method.unwrap_or_default(),
                income,
                expense,
                note,
            };

            let record = service.create(input)?;

            println!("Created record:");
            print!("{}", format_record_details(&record));
        }

        RecordCommands::List {
            filters,
            page,
            page_size,
        } => {
            let filter = filters.to_filter()?;
            let page_size = page_size.unwrap_or(settings.page_size);

            let output = service.query(&filter, PageRequest::new(page, page_size))?;

            print!("{}", format_record_table(&output.page));
            println!();
            print!("{}", format_totals(&output.totals, &settings.currency_symbol));
        }

        RecordCommands::Show { id } => {
            let record = service
                .find(&id)?
                .ok_or_else(|| TallyError::record_not_found(&id))?;

            print!("{}", format_record_details(&record));
        }

        RecordCommands::Edit {
            id,
            date,
            item,
            category,
            method,
            income,
            expense,
            note,
        } => {
            let record = service
                .find(&id)?
                .ok_or_else(|| TallyError::record_not_found(&id))?;

            let input = UpdateRecordInput {
                date: date.map(|d| parse_date(&d)).transpose()?,
                item,
                categories: if category.is_empty() {
                    None
                } else {
                    Some(category)
                },
                method,
                income: income.map(|a| parse_amount(&a)).transpose()?,
                expense: expense.map(|a| parse_amount(&a)).transpose()?,
                note,
            };

            let updated = service.update(record.id, input)?;

            println!("Updated record:");
            print!("{}", format_record_details(&updated));
        }

        RecordCommands::Delete { id, force } => {
            let record = service
                .find(&id)?
                .ok_or_else(|| TallyError::record_not_found(&id))?;

            if !force {
                println!("About to delete record:");
                print!("{}", format_record_details(&record));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(record.id)?;
            println!("Deleted record: {} ({})", deleted.id, deleted.item);
        }
    }

    Ok(())
}

/// Handle the summary command: filter-wide totals without the record table
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    filters: FilterArgs,
) -> TallyResult<()> {
    let service = RecordService::new(storage);
    let filter = filters.to_filter()?;

    let records = service.list(&filter)?;
    let totals = crate::query::aggregate(&records);

    println!("{} records match", records.len());
    print!("{}", format_totals(&totals, &settings.currency_symbol));

    Ok(())
}

fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TallyError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s)))
}

fn parse_amount(s: &str) -> TallyResult<Amount> {
    Amount::parse(s).map_err(|e| TallyError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_validate_month() {
        let args = FilterArgs {
            month: Some("2024-05".to_string()),
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.month.as_deref(), Some("2024-05"));

        let bad = FilterArgs {
            month: Some("May 2024".to_string()),
            ..Default::default()
        };
        assert!(bad.to_filter().is_err());
    }

    #[test]
    fn test_filter_args_normalize_month_padding() {
        let args = FilterArgs {
            month: Some("2024-5".to_string()),
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.month.as_deref(), Some("2024-05"));
    }

    #[test]
    fn test_filter_args_blank_month_clears() {
        let args = FilterArgs {
            month: Some("  ".to_string()),
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert!(filter.month.is_none());
    }

    #[test]
    fn test_filter_args_all_fields() {
        let args = FilterArgs {
            month: Some("2024-05".to_string()),
            category: Some("Food".to_string()),
            method: Some("Cash".to_string()),
            search: Some("Lunch".to_string()),
        };
        let filter = args.to_filter().unwrap();

        assert!(!filter.is_empty());
        assert_eq!(filter.category.as_deref(), Some("Food"));
        // Search text is lowercased by the filter
        assert_eq!(filter.text.as_deref(), Some("lunch"));
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-05-15").is_ok());
        assert!(parse_date("15/05/2024").is_err());
    }
}
