//! Audit log CLI command

use crate::error::TallyResult;
use crate::storage::Storage;

/// Show the most recent audit log entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> TallyResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    let total = storage.audit().entry_count()?;
    println!("Showing {} of {} audit entries:\n", entries.len(), total);

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
