//! Export
//!
//! Writes the full expense list (never a filtered view) to a tabular file.

pub mod csv;

use std::path::PathBuf;

pub use self::csv::{export_expenses_csv, write_expenses_csv, CSV_HEADER};

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File written with `count` data rows
    Written { path: PathBuf, count: usize },
    /// The store was empty; no file was touched
    NothingToExport,
}
