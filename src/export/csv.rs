//! CSV export of expenses
//!
//! One header row `Date,Amount,Category,Description`, then one row per expense
//! in storage order. Fields containing the delimiter, quotes or line breaks
//! are quoted by the csv writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

use super::ExportOutcome;

pub const CSV_HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Write expenses as CSV to any writer. Returns the number of data rows.
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> LedgerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = expense.amount.to_string();
        csv_writer
            .write_record([
                date.as_str(),
                amount.as_str(),
                expense.category.as_str(),
                expense.description.as_str(),
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Persistence(format!("Failed to flush export: {}", e)))?;

    Ok(expenses.len())
}

/// Export all expenses to a CSV file
///
/// Does nothing and reports [`ExportOutcome::NothingToExport`] when there
/// are no expenses.
pub fn export_expenses_csv<P: AsRef<Path>>(
    expenses: &[Expense],
    path: P,
) -> LedgerResult<ExportOutcome> {
    let path = path.as_ref();

    if expenses.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let file = File::create(path).map_err(|e| {
        LedgerError::Persistence(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let count = write_expenses_csv(expenses, BufWriter::new(file))?;
    tracing::info!(count, path = %path.display(), "exported expenses");

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        count,
    })
}

fn export_error(err: csv::Error) -> LedgerError {
    LedgerError::Persistence(format!("Failed to write CSV: {}", err))
}
