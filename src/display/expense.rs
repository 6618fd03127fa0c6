//! Expense display formatting
//!
//! Renders the expense list as a table and single expenses as detail blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};
use crate::reports::total_of;

/// One table line. `#` is the 1-based position in the store, which is what
/// `delete` and `edit` take.
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format positioned expenses (as returned by `ExpenseFilter::select`)
pub fn format_expense_table(rows: &[(usize, &Expense)], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let table_rows: Vec<ExpenseRow> = rows
        .iter()
        .map(|(index, expense)| ExpenseRow {
            row: index + 1,
            date: expense.date.format("%Y-%m-%d").to_string(),
            amount: expense.amount.format_with_symbol(currency_symbol),
            category: expense.category.clone(),
            description: super::report::truncate(&expense.description, 40),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    let total: Money = total_of(rows.iter().map(|(_, e)| *e));
    format!(
        "{}\n\nTotal: {} ({} expenses)\n",
        table,
        total.format_with_symbol(currency_symbol),
        rows.len()
    )
}

/// Format one expense for confirmation messages
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("  Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", expense.description));
    }

    output
}
