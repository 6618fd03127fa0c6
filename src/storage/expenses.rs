//! Expense repository
//!
//! Holds the ordered list of expenses for the session and reads/writes it
//! as a JSON array in expenses.json. Insertion order is storage order and is
//! preserved across save and load.

use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::models::{Expense, ExpenseId, ExpenseKey, Money};

use super::file_io::{read_json, write_json_atomic};

pub struct ExpenseRepository {
    path: PathBuf,
    records: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory records with the file contents
    ///
    /// A missing file loads as empty. If the file can't be read or parsed the
    /// repository is left empty and the error is returned.
    pub fn load(&mut self) -> Result<usize, LedgerError> {
        self.records.clear();
        let records: Vec<Expense> = read_json(&self.path)?;
        self.records = records;

        tracing::debug!(
            count = self.records.len(),
            path = %self.path.display(),
            "loaded expenses"
        );
        Ok(self.records.len())
    }

    /// Overwrite the file with the current records
    pub fn save(&self) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, self.records.as_slice())?;
        tracing::debug!(
            count = self.records.len(),
            path = %self.path.display(),
            "saved expenses"
        );
        Ok(())
    }

    /// All expenses in storage order
    pub fn all(&self) -> &[Expense] {
        &self.records
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Zero-based storage position of an expense
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|e| e.id == id)
    }

    /// Expense at a zero-based storage position
    pub fn get_at(&self, index: usize) -> Option<&Expense> {
        self.records.get(index)
    }

    /// First expense (in storage order) whose four fields equal `key`
    pub fn find_matching(&self, key: &ExpenseKey) -> Option<&Expense> {
        self.records.iter().find(|e| e.matches(key))
    }

    /// Add to the end; identical records are kept side by side
    pub fn append(&mut self, expense: Expense) {
        self.records.push(expense);
    }

    /// Remove the expense with this ID
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Remove the first expense matching `key`; no-op if none does
    pub fn remove_matching(&mut self, key: &ExpenseKey) -> Option<Expense> {
        let index = self.records.iter().position(|e| e.matches(key))?;
        Some(self.records.remove(index))
    }

    /// Overwrite amount, category and description of the expense with this ID.
    /// The date is never touched. Returns the updated expense.
    pub fn replace(
        &mut self,
        id: ExpenseId,
        amount: Money,
        category: &str,
        description: &str,
    ) -> Option<&Expense> {
        let expense = self.records.iter_mut().find(|e| e.id == id)?;
        apply_replacement(expense, amount, category, description);
        Some(expense)
    }

    /// Same as [`replace`](Self::replace) but picks the first expense matching `key`
    pub fn replace_matching(
        &mut self,
        key: &ExpenseKey,
        amount: Money,
        category: &str,
        description: &str,
    ) -> Option<&Expense> {
        let expense = self.records.iter_mut().find(|e| e.matches(key))?;
        apply_replacement(expense, amount, category, description);
        Some(expense)
    }

    /// Remove everything. Returns how many expenses were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn apply_replacement(expense: &mut Expense, amount: Money, category: &str, description: &str) {
    expense.amount = amount;
    expense.category = category.to_string();
    expense.description = description.to_string();
}
