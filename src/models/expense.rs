//! Expense model
//!
//! An expense is one spending event: the day it was recorded, an amount, a
//! category label and a free-form description. The record file stores exactly
//! those four fields; the `id` exists only in memory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Session identifier, reassigned on every load
    #[serde(skip)]
    pub id: ExpenseId,

    /// Day the expense was recorded
    pub date: NaiveDate,

    pub amount: Money,

    pub category: String,

    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create an expense with a fresh ID
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// The four-field value identifying this expense by content
    pub fn key(&self) -> ExpenseKey {
        ExpenseKey {
            date: self.date,
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    /// Whether all four fields equal the given key
    pub fn matches(&self, key: &ExpenseKey) -> bool {
        self.date == key.date
            && self.amount == key.amount
            && self.category == key.category
            && self.description == key.description
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Field tuple used to pick an expense by value instead of by ID
///
/// Several expenses can share one key; operations taking a key act on the
/// first match in storage order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseKey {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub description: String,
}

impl ExpenseKey {
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ExpenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} '{}'",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category,
            self.description
        )
    }
}
