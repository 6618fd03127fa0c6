//! Display formatting for terminal output
//!
//! Turns expenses and reports into the text the command-line front end
//! prints.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::format_breakdown;
