//! Audit logging
//!
//! Records every mutation of the ledger (add, edit, delete, clear) with the
//! record's values before and after, in an append-only JSONL file. The log is
//! for inspection only; nothing is ever replayed from it.
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
