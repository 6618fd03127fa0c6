//! Core data models
//!
//! The ledger has a single entity, the expense, plus the value types it is
//! built from and the set of known category labels.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseKey};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
