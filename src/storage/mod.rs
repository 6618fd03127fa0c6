//! Storage layer
//!
//! `Storage` owns everything the session knows: the expense records, the set
//! of category labels, and the audit log. It is the only place that touches
//! the record file.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::models::CategorySet;

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    seed_categories: CategorySet,
    pub expenses: ExpenseRepository,
    pub categories: CategorySet,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create storage rooted at `paths`, seeded from `settings`
    pub fn new(paths: LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let seed_categories = CategorySet::from_names(&settings.categories);
        let audit = settings
            .audit_log
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            categories: seed_categories.clone(),
            seed_categories,
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load expenses from disk and register their categories
    ///
    /// On failure the store is empty and the categories are back to the seed
    /// list; the session can continue.
    pub fn load(&mut self) -> Result<usize, LedgerError> {
        self.categories = self.seed_categories.clone();

        let count = self.expenses.load().inspect_err(|e| {
            tracing::warn!(error = %e, "could not load expenses, starting empty");
        })?;

        for expense in self.expenses.all() {
            self.categories.register(&expense.category);
        }
        Ok(count)
    }

    /// Write all expenses to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        self.expenses.save().inspect_err(|e| {
            tracing::warn!(error = %e, "could not save expenses");
        })
    }

    /// Append to the audit log if enabled. Failures are logged, not returned.
    pub fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                tracing::warn!(error = %e, operation = %entry.operation, "audit log write failed");
            }
        }
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}
