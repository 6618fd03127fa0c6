//! Service layer
//!
//! Business operations on top of the storage layer: input validation,
//! selection resolution, save-after-mutate and audit logging.

pub mod expense;
pub mod filter;

pub use expense::{
    parse_amount, parse_date, DeleteSummary, EditExpenseInput, ExpenseService, Selection,
};
pub use filter::{CategorySelector, ExpenseFilter};
