//! CLI command for CSV export

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::export::{export_expenses_csv, ExportOutcome};
use crate::storage::Storage;

/// Export the whole store to `output`, or to `expenses.csv` in the data
/// directory when no path is given
pub fn handle_export_command(storage: &Storage, output: Option<PathBuf>) -> LedgerResult<()> {
    match export_to(storage, output)? {
        ExportOutcome::Written { path, count } => {
            println!("Exported {} expenses to: {}", count, path.display());
        }
        ExportOutcome::NothingToExport => {
            println!("No data to export.");
        }
    }
    Ok(())
}

fn export_to(storage: &Storage, output: Option<PathBuf>) -> LedgerResult<ExportOutcome> {
    let path = output.unwrap_or_else(|| storage.paths().export_file());
    export_expenses_csv(storage.expenses.all(), path)
}
