//! Audit log CLI command

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the most recent `count` audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> LedgerResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled in config.json.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No changes recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
