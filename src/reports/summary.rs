//! Totals and per-category breakdown
//!
//! Both work on any sequence of expenses, so the same code serves the full
//! store and a filtered view.

use crate::models::{Expense, Money};

/// Sum of amounts; zero for an empty sequence
pub fn total_of<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Amounts grouped by category, in first-seen order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    rows: Vec<CategoryTotal>,
    total: Money,
}

impl CategoryBreakdown {
    /// Group expenses by category and sum each group
    pub fn generate<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut rows: Vec<CategoryTotal> = Vec::new();
        let mut total = Money::zero();

        for expense in expenses {
            total += expense.amount;
            match rows.iter_mut().find(|r| r.category == expense.category) {
                Some(row) => {
                    row.total += expense.amount;
                    row.count += 1;
                }
                None => rows.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }

        for row in &mut rows {
            row.percentage = if total.is_zero() {
                0.0
            } else {
                (row.total.cents() as f64 / total.cents() as f64) * 100.0
            };
        }

        Self { rows, total }
    }

    /// True when there was nothing to group ("no data")
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[CategoryTotal] {
        &self.rows
    }

    /// Sum for one category, if it appeared
    pub fn get(&self, category: &str) -> Option<Money> {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.total)
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.total
    }

    /// (category, total) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.rows.iter().map(|r| (r.category.as_str(), r.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
    }

    #[test]
    fn test_total_of() {
        let expenses = vec![expense(1250, "Food"), expense(750, "Other"), expense(1, "Food")];
        assert_eq!(total_of(&expenses).cents(), 2001);
        assert_eq!(total_of(expenses.iter().rev()).cents(), 2001);
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        assert!(total_of(&Vec::<Expense>::new()).is_zero());
    }

    #[test]
    fn test_breakdown_first_seen_order() {
        let expenses = vec![
            expense(500, "Transport"),
            expense(1000, "Food"),
            expense(250, "Transport"),
            expense(100, "Entertainment"),
        ];
        let breakdown = CategoryBreakdown::generate(&expenses);

        let pairs: Vec<_> = breakdown.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Transport", Money::from_cents(750)),
                ("Food", Money::from_cents(1000)),
                ("Entertainment", Money::from_cents(100)),
            ]
        );
        assert_eq!(breakdown.rows()[0].count, 2);
        assert_eq!(breakdown.total().cents(), 1850);
        assert_eq!(breakdown.get("Food"), Some(Money::from_cents(1000)));
        assert_eq!(breakdown.get("Rent"), None);
    }

    #[test]
    fn test_breakdown_percentages() {
        let expenses = vec![expense(300, "Food"), expense(100, "Other")];
        let breakdown = CategoryBreakdown::generate(&expenses);

        assert!((breakdown.rows()[0].percentage - 75.0).abs() < 1e-9);
        assert!((breakdown.rows()[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_of_zero_amounts() {
        let expenses = vec![expense(0, "Food")];
        let breakdown = CategoryBreakdown::generate(&expenses);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown.rows()[0].percentage, 0.0);
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = CategoryBreakdown::generate(&Vec::<Expense>::new());
        assert!(breakdown.is_empty());
        assert!(breakdown.total().is_zero());
    }
}
