//! Reports
//!
//! Aggregations over expenses: totals and the per-category breakdown.

pub mod summary;

pub use summary::{total_of, CategoryBreakdown, CategoryTotal};
