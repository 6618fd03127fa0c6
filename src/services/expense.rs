//! Expense service
//!
//! The mutating operations on the ledger: add, delete, clear and edit. Each
//! mutation is followed by a save; when the save fails the in-memory change
//! is kept and the persistence error is returned.

use chrono::{Local, NaiveDate};

use crate::audit::AuditEntry;
use crate::error::{LedgerError, LedgerResult, ValidationError};
use crate::models::{Expense, ExpenseId, ExpenseKey, Money};
use crate::storage::Storage;

/// How the front end points at an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Session ID; always unambiguous
    Id(ExpenseId),
    /// Field values; resolves to the first match in storage order
    Fields(ExpenseKey),
}

impl From<ExpenseId> for Selection {
    fn from(id: ExpenseId) -> Self {
        Self::Id(id)
    }
}

impl From<ExpenseKey> for Selection {
    fn from(key: ExpenseKey) -> Self {
        Self::Fields(key)
    }
}

/// New values for an edit. `None` means the user cancelled that prompt.
#[derive(Debug, Clone, Default)]
pub struct EditExpenseInput {
    /// Cancelling the amount cancels the whole edit
    pub amount: Option<Money>,
    /// Missing keeps the current category
    pub category: Option<String>,
    /// Missing keeps the current description
    pub description: Option<String>,
}

/// What a delete request did
#[derive(Debug, Clone, Default)]
pub struct DeleteSummary {
    /// Removed expenses, in selection order
    pub removed: Vec<Expense>,
    /// Selections that matched nothing
    pub unmatched: usize,
}

/// Parse user-entered amount text
pub fn parse_amount(text: &str) -> Result<Money, ValidationError> {
    let amount =
        Money::parse(text).map_err(|_| ValidationError::InvalidAmount(text.trim().to_string()))?;
    validate_amount(amount)?;
    Ok(amount)
}

fn validate_amount(amount: Money) -> Result<(), ValidationError> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount(amount.to_string()));
    }
    Ok(())
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

fn validate_category(category: &str) -> Result<&str, ValidationError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(category)
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense dated today
    ///
    /// Fails with `InvalidAmount`/`NegativeAmount` or `EmptyCategory` without
    /// touching the store.
    pub fn add(
        &mut self,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> LedgerResult<Expense> {
        let amount = parse_amount(amount_text)?;
        let category = validate_category(category)?;

        let expense = Expense::new(today(), amount, category, description);
        if self.storage.categories.register(category) {
            tracing::info!(category, "registered new category");
        }
        self.storage.expenses.append(expense.clone());
        tracing::info!(id = %expense.id, amount = %expense.amount, category, "added expense");

        self.storage.save()?;
        self.storage.audit(AuditEntry::create(&expense));

        Ok(expense)
    }

    /// Look up the expense a selection points at
    pub fn resolve(&self, selection: &Selection) -> Option<&Expense> {
        match selection {
            Selection::Id(id) => self.storage.expenses.get(*id),
            Selection::Fields(key) => self.storage.expenses.find_matching(key),
        }
    }

    /// Delete each selected expense
    ///
    /// Selections are handled one at a time; each removes at most one
    /// expense. The store is saved even when some selections matched nothing.
    pub fn delete_selected(&mut self, selections: &[Selection]) -> LedgerResult<DeleteSummary> {
        if selections.is_empty() {
            return Err(LedgerError::NoSelection);
        }

        let mut summary = DeleteSummary::default();
        for selection in selections {
            let removed = match selection {
                Selection::Id(id) => self.storage.expenses.remove(*id),
                Selection::Fields(key) => self.storage.expenses.remove_matching(key),
            };

            match removed {
                Some(expense) => {
                    tracing::info!(id = %expense.id, "deleted expense");
                    summary.removed.push(expense);
                }
                None => {
                    tracing::debug!(?selection, "selection matched no expense");
                    summary.unmatched += 1;
                }
            }
        }

        self.storage.save()?;
        for expense in &summary.removed {
            self.storage.audit(AuditEntry::delete(expense));
        }

        Ok(summary)
    }

    /// Remove every expense. The caller confirms with the user first.
    pub fn clear_all(&mut self) -> LedgerResult<usize> {
        let removed = self.storage.expenses.clear();
        tracing::info!(removed, "cleared all expenses");

        self.storage.save()?;
        self.storage.audit(AuditEntry::clear(removed));

        Ok(removed)
    }

    /// Change amount, category and description of one expense
    ///
    /// Returns `Ok(None)` without changing anything when the amount was
    /// cancelled. The date is never changed.
    pub fn edit(
        &mut self,
        target: Option<&Selection>,
        input: EditExpenseInput,
    ) -> LedgerResult<Option<Expense>> {
        let target = target.ok_or(LedgerError::NoSelection)?;
        let before = self
            .resolve(target)
            .cloned()
            .ok_or_else(|| LedgerError::expense_not_found(describe(target)))?;

        let Some(amount) = input.amount else {
            tracing::debug!(id = %before.id, "edit cancelled");
            return Ok(None);
        };
        validate_amount(amount)?;

        let category = match &input.category {
            Some(category) => validate_category(category)?.to_string(),
            None => before.category.clone(),
        };
        let description = input
            .description
            .unwrap_or_else(|| before.description.clone());

        if self.storage.categories.register(&category) {
            tracing::info!(category = %category, "registered new category");
        }
        let after = self
            .storage
            .expenses
            .replace(before.id, amount, &category, &description)
            .cloned()
            .ok_or_else(|| LedgerError::expense_not_found(before.id.to_string()))?;
        tracing::info!(id = %after.id, "edited expense");

        self.storage.save()?;
        self.storage.audit(AuditEntry::update(&before, &after));

        Ok(Some(after))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn describe(selection: &Selection) -> String {
    match selection {
        Selection::Id(id) => id.to_string(),
        Selection::Fields(key) => key.to_string(),
    }
}
