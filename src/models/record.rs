//! Ledger record model
//!
//! A record is a single income or expense entry: a dated, labelled amount
//! with one or more categories and a payment method.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::amount::Amount;
use super::ids::RecordId;

/// An ordered set of category labels attached to a record
///
/// Older stored records carried the category as a single string; newer ones
/// carry an array. Both serialized forms are accepted and normalized here, at
/// the data-model boundary, so the rest of the crate only ever sees the list
/// form. Serialization always writes the list form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Create a category set, dropping empty labels
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels.into_iter().filter(|l| !l.is_empty()).collect())
    }

    /// Check whether the set contains the given label (exact, case-sensitive)
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// The labels joined with a single space, as searched by the text filter
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    /// The labels in insertion order
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for CategorySet {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// The two historical serialized shapes of the category field
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryField {
    One(String),
    Many(Vec<String>),
}

impl From<CategoryField> for CategorySet {
    fn from(field: CategoryField) -> Self {
        match field {
            CategoryField::One(label) => Self::new(vec![label]),
            CategoryField::Many(labels) => Self::new(labels),
        }
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(CategoryField::deserialize(deserializer)?.into())
    }
}

/// One income or expense ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Entry date
    pub date: NaiveDate,

    /// Free-text label for what the entry was
    pub item: String,

    /// One or more category labels (legacy single-string form accepted)
    #[serde(rename = "category")]
    pub categories: CategorySet,

    /// Payment method label
    #[serde(default)]
    pub method: String,

    /// Income amount; zero for expense records
    #[serde(default)]
    pub income: Amount,

    /// Expense amount; zero for income records
    #[serde(default)]
    pub expense: Amount,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,

    /// Stamped by the store on first save; used as the tie-break sort key.
    /// None on records not yet round-tripped through the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Create a new record with the given date, item, and categories
    pub fn new(date: NaiveDate, item: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            id: RecordId::new(),
            date,
            item: item.into(),
            categories: CategorySet::new(categories),
            method: String::new(),
            income: Amount::zero(),
            expense: Amount::zero(),
            note: String::new(),
            created_at: None,
        }
    }

    /// Create a record with all common fields
    #[allow(clippy::too_many_arguments)]
    pub fn with_details(
        date: NaiveDate,
        item: impl Into<String>,
        categories: Vec<String>,
        method: impl Into<String>,
        income: Amount,
        expense: Amount,
        note: impl Into<String>,
    ) -> Self {
        let mut record = Self::new(date, item, categories);
        record.method = method.into();
        record.income = income;
        record.expense = expense;
        record.note = note.into();
        record
    }

    /// Check if this record is an income entry
    pub fn is_income(&self) -> bool {
        self.income.is_positive()
    }

    /// Check if this record is an expense entry
    pub fn is_expense(&self) -> bool {
        self.expense.is_positive()
    }

    /// The record's date in ISO `YYYY-MM-DD` form, as used by the month filter
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Validate the record at the construction boundary
    ///
    /// Enforces the entry-form rules: exactly one of income/expense is
    /// positive, and at least one category is present. Stored data that
    /// violates these is still tolerated by the query pipeline.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.income.is_positive() && self.expense.is_positive() {
            return Err(RecordValidationError::BothAmountsSet);
        }

        if !self.income.is_positive() && !self.expense.is_positive() {
            return Err(RecordValidationError::NoAmountSet);
        }

        if self.categories.is_empty() {
            return Err(RecordValidationError::NoCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = if self.is_income() {
            format!("+{}", self.income)
        } else {
            format!("-{}", self.expense)
        };
        write!(f, "{} {} {}", self.date_string(), self.item, amount)
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    BothAmountsSet,
    NoAmountSet,
    NoCategory,
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothAmountsSet => {
                write!(f, "A record carries either an income or an expense, not both")
            }
            Self::NoAmountSet => {
                write!(f, "A record needs an income or expense greater than zero")
            }
            Self::NoCategory => write!(f, "A record needs at least one category"),
        }
    }
}

impl std::error::Error for RecordValidationError {}
