//! tally - terminal income and expense ledger
//!
//! This library provides the core functionality for the tally ledger
//! application: a dated list of income and expense records with categories
//! and payment methods, filtered and summarized from the command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, amounts, categories)
//! - `query`: The pure filter/sort/paginate/aggregate pipeline
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON/YAML export
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod services;
pub mod storage;

pub use error::TallyError;
