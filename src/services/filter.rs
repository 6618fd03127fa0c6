//! Expense filtering
//!
//! Filters never mutate the store. They pick the sub-sequence of expenses
//! that satisfies a category selector and an inclusive date range, keeping
//! storage order.

use chrono::NaiveDate;

use crate::models::Expense;

/// Which categories a filter lets through
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    /// Every category
    #[default]
    All,
    /// Exactly this label
    Only(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == category,
        }
    }
}

impl From<Option<String>> for CategorySelector {
    fn from(category: Option<String>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: CategorySelector,
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// A filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = CategorySelector::Only(name.into());
        self
    }

    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.since(start).until(end)
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.matches(&expense.category)
            && self.start_date.map_or(true, |start| expense.date >= start)
            && self.end_date.map_or(true, |end| expense.date <= end)
    }

    /// Matching expenses with their zero-based storage positions
    pub fn select<'r>(&self, expenses: &'r [Expense]) -> Vec<(usize, &'r Expense)> {
        let matching = expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| self.matches(e));

        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    /// Matching expenses, cloned, in storage order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        self.select(expenses)
            .into_iter()
            .map(|(_, e)| e.clone())
            .collect()
    }
}
