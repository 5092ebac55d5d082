//! Record filtering
//!
//! A `RecordFilter` is the conjunction of up to four predicates: month
//! prefix, category, payment method, and free-text search. It is transient,
//! rebuilt from user input on every query.

use crate::models::Record;

/// Filter criteria applied conjunctively to the full record set
///
/// Absent fields always match. All predicates degrade missing record fields
/// to neutral values rather than failing; filtering is total over its input.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Month prefix in `YYYY-MM` form, matched against the ISO date string
    pub month: Option<String>,
    /// Category label; matches records whose category set contains it exactly
    pub category: Option<String>,
    /// Payment method label, matched by exact string equality
    pub method: Option<String>,
    /// Case-insensitive free-text needle, stored lowercased
    pub text: Option<String>,
}

impl RecordFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by month prefix (`YYYY-MM`); blank input clears the predicate
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = non_blank(month.into());
        self
    }

    /// Filter by category label; blank input clears the predicate
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    /// Filter by payment method; blank input clears the predicate
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = non_blank(method.into());
        self
    }

    /// Filter by free-text substring; blank input clears the predicate
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = non_blank(text.into().to_lowercase());
        self
    }

    /// Check whether no predicate is set
    pub fn is_empty(&self) -> bool {
        self.month.is_none()
            && self.category.is_none()
            && self.method.is_none()
            && self.text.is_none()
    }

    /// Check whether a single record satisfies every set predicate
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(month) = &self.month {
            // String prefix, not calendar-aware: ISO dates sort and match
            // lexicographically.
            if !record.date_string().starts_with(month.as_str()) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            // Never case-normalized.
            if !record.categories.contains(category) {
                return false;
            }
        }

        if let Some(method) = &self.method {
            if record.method != *method {
                return false;
            }
        }

        if let Some(needle) = &self.text {
            // The amount fields are searched in their plain decimal-string
            // form, so "40" matches an expense of 40.00.
            let hit = record.item.to_lowercase().contains(needle)
                || record.note.to_lowercase().contains(needle)
                || record.categories.joined().to_lowercase().contains(needle)
                || record.method.to_lowercase().contains(needle)
                || record.income.plain_string().contains(needle)
                || record.expense.plain_string().contains(needle);
            if !hit {
                return false;
            }
        }

        true
    }

    /// Return the matching subset, preserving input order
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
