//! Core data models for tally
//!
//! This module contains the data structures that represent the ledger domain:
//! records, amounts, and identifiers.

pub mod amount;
pub mod ids;
pub mod record;

pub use amount::{Amount, AmountParseError};
pub use ids::RecordId;
pub use record::{CategorySet, Record, RecordValidationError};
