//! Service layer for tally
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the query pipeline, and audit logging.

pub mod master;
pub mod record;

pub use master::MasterService;
pub use record::{CreateRecordInput, RecordService, UpdateRecordInput};
