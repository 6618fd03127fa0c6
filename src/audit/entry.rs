//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

use super::diff::generate_diff;

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// Whole store emptied
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single audit log entry
///
/// `before`/`after` hold the four record fields; the session ID is only kept
/// as a display string since it means nothing outside the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: None,
            before: None,
            after: None,
            summary: None,
        }
    }

    pub fn create(expense: &Expense) -> Self {
        Self {
            expense_id: Some(expense.id.to_string()),
            after: serde_json::to_value(expense).ok(),
            ..Self::new(Operation::Create)
        }
    }

    /// Edit of one record; the summary lists the fields that changed
    pub fn update(before: &Expense, after: &Expense) -> Self {
        let before = serde_json::to_value(before).ok();
        let after_value = serde_json::to_value(after).ok();
        let summary = match (&before, &after_value) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            expense_id: Some(after.id.to_string()),
            before,
            after: after_value,
            summary,
            ..Self::new(Operation::Update)
        }
    }

    pub fn delete(expense: &Expense) -> Self {
        Self {
            expense_id: Some(expense.id.to_string()),
            before: serde_json::to_value(expense).ok(),
            ..Self::new(Operation::Delete)
        }
    }

    /// Store emptied; `removed` is how many records went away
    pub fn clear(removed: usize) -> Self {
        Self {
            summary: Some(format!("removed {} expenses", removed)),
            ..Self::new(Operation::Clear)
        }
    }

    /// Single-line rendering for terminal output
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation
        );
        if let Some(id) = &self.expense_id {
            line.push_str(&format!(" {}", id));
        }
        if let Some(summary) = &self.summary {
            line.push_str(&format!(" ({})", summary));
        }
        line
    }
}
