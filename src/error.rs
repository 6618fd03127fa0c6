//! Custom error types for the expense ledger
//!
//! Errors fall into three groups: bad user input (`Validation`), an operation
//! that needs a target but got none (`NoSelection`), and file read/write/parse
//! failures (`Persistence`). None of them is fatal to the process.

use thiserror::Error;

/// Rejected user input. Every variant leaves the store unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The amount text is not a decimal number
    #[error("Invalid amount: '{0}'. Enter a number like 12.50")]
    InvalidAmount(String),

    /// The amount parsed but is below zero
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),

    /// The category is empty or whitespace
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// A date is not in YYYY-MM-DD form
    #[error("Invalid date: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// A row number does not point at a stored expense
    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The operation needs at least one selected expense
    #[error("No expense selected")]
    NoSelection,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File read, write or parse failure
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a missing-selection error
    pub fn is_no_selection(&self) -> bool {
        matches!(self, Self::NoSelection)
    }

    /// Check if this is a file read/write/parse error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
