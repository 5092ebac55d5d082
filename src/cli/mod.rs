//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod export;
pub mod method;
pub mod record;

pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use method::{handle_method_command, MethodCommands};
pub use record::{
    handle_record_command, handle_summary_command, FilterArgs, RecordCommands,
};
