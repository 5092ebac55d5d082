//! Record display formatting
//!
//! Formats record pages as terminal tables and single records as detail
//! panels.

use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Record;
use crate::query::RecordPage;

/// One row of the record list table
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Category")]
    categories: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl RecordRow {
    fn from_record(record: &Record) -> Self {
        Self {
            date: record.date_string(),
            time: record
                .created_at
                .map(|ts| ts.with_timezone(&Local).format("%H:%M").to_string())
                .unwrap_or_default(),
            item: record.item.clone(),
            categories: record.categories.to_string(),
            method: record.method.clone(),
            income: if record.income.is_positive() {
                format!("+{}", record.income)
            } else {
                String::new()
            },
            expense: if record.expense.is_positive() {
                format!("-{}", record.expense)
            } else {
                String::new()
            },
            note: record.note.clone(),
        }
    }
}

/// Format one page of records as a table with a pager line
pub fn format_record_table(page: &RecordPage) -> String {
    if page.items.is_empty() {
        return "No records found.\n".to_string();
    }

    let rows: Vec<RecordRow> = page.items.iter().map(RecordRow::from_record).collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\n\nPage {} of {} ({} records)\n",
        table, page.page, page.total_pages, page.total_records
    )
}

/// Format record details for display
pub fn format_record_details(record: &Record) -> String {
    let mut output = String::new();

    output.push_str(&format!("Record:   {}\n", record.id));
    output.push_str(&format!("Date:     {}\n", record.date_string()));
    output.push_str(&format!("Item:     {}\n", record.item));
    output.push_str(&format!("Category: {}\n", record.categories));

    if !record.method.is_empty() {
        output.push_str(&format!("Method:   {}\n", record.method));
    }

    if record.income.is_positive() {
        output.push_str(&format!("Income:   +{}\n", record.income));
    }
    if record.expense.is_positive() {
        output.push_str(&format!("Expense:  -{}\n", record.expense));
    }

    if !record.note.is_empty() {
        output.push_str(&format!("Note:     {}\n", record.note));
    }

    if let Some(created_at) = record.created_at {
        output.push_str(&format!(
            "Created:  {}\n",
            created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }

    output
}
