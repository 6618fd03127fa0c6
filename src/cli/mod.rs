//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod expense;
pub mod export;
pub mod report;

pub use audit::handle_history_command;
pub use category::handle_categories_command;
pub use expense::{handle_expense_command, ExpenseCommands, FilterArgs};
pub use export::handle_export_command;
pub use report::handle_summary_command;
