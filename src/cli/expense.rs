//! Expense CLI commands
//!
//! Add, list, delete, edit and clear. Rows are addressed by their 1-based
//! position in the store, as shown in the `#` column of `list`.

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{LedgerError, LedgerResult, ValidationError};
use crate::models::{ExpenseId, ExpenseKey};
use crate::services::{
    parse_amount, parse_date, EditExpenseInput, ExpenseFilter, ExpenseService, Selection,
};
use crate::storage::Storage;

/// Category and date range options shared by `list` and `summary`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> LedgerResult<ExpenseFilter> {
        let mut filter = ExpenseFilter {
            category: self.category.clone().into(),
            ..ExpenseFilter::new()
        };
        if let Some(from) = &self.from {
            filter = filter.since(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.until(parse_date(to)?);
        }
        Ok(filter)
    }
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense dated today
    Add {
        /// Amount (e.g. "12.50")
        amount: String,
        /// Category label
        category: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Show at most this many rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete expenses by row number or by field values
    #[command(alias = "rm")]
    Delete {
        /// Row numbers from `list`
        rows: Vec<usize>,
        /// Match on date (YYYY-MM-DD) instead of row numbers
        #[arg(long, requires_all = ["amount", "category"], conflicts_with = "rows")]
        date: Option<String>,
        /// Amount to match
        #[arg(long, requires = "date")]
        amount: Option<String>,
        /// Category to match
        #[arg(long, requires = "date")]
        category: Option<String>,
        /// Description to match (default: empty)
        #[arg(long, requires = "date")]
        description: Option<String>,
    },

    /// Change amount, category or description of one expense
    Edit {
        /// Row number from `list`
        row: usize,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete every expense
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            let expense = ExpenseService::new(storage).add(&amount, &category, &description)?;
            println!("Added expense:");
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::List { filter, limit } => {
            let mut filter = filter.to_filter()?;
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }
            let rows = filter.select(storage.expenses.all());
            print!("{}", format_expense_table(&rows, symbol));
        }

        ExpenseCommands::Delete {
            rows,
            date,
            amount,
            category,
            description,
        } => {
            let selections = if let Some(date) = date {
                let key = ExpenseKey::new(
                    parse_date(&date)?,
                    parse_amount(amount.as_deref().unwrap_or_default())?,
                    category.unwrap_or_default(),
                    description.unwrap_or_default(),
                );
                vec![Selection::Fields(key)]
            } else {
                let mut selections = Vec::with_capacity(rows.len());
                for row in rows {
                    selections.push(Selection::Id(resolve_row(storage, row)?));
                }
                selections
            };

            let summary = ExpenseService::new(storage).delete_selected(&selections)?;
            for expense in &summary.removed {
                println!("Deleted: {}", expense);
            }
            if summary.unmatched > 0 {
                println!("{} selection(s) matched no expense", summary.unmatched);
            }
        }

        ExpenseCommands::Edit {
            row,
            amount,
            category,
            description,
        } => {
            let id = resolve_row(storage, row)?;
            let current = storage
                .expenses
                .get(id)
                .cloned()
                .ok_or_else(|| LedgerError::expense_not_found(format!("row {}", row)))?;

            let amount = match amount {
                Some(text) => parse_amount(&text)?,
                None => current.amount,
            };
            let input = EditExpenseInput {
                amount: Some(amount),
                category,
                description,
            };

            match ExpenseService::new(storage).edit(Some(&Selection::Id(id)), input)? {
                Some(updated) => {
                    println!("Updated expense:");
                    print!("{}", format_expense_details(&updated, symbol));
                }
                None => println!("Edit cancelled."),
            }
        }

        ExpenseCommands::Clear { force } => {
            let count = storage.expenses.len();
            if count == 0 {
                println!("No expenses to clear.");
                return Ok(());
            }

            if !force {
                println!("This will delete all {} expenses.", count);
                println!("To proceed, run again with --force flag:");
                println!("  expenses clear --force");
                return Ok(());
            }

            let removed = ExpenseService::new(storage).clear_all()?;
            println!("Cleared {} expenses.", removed);
        }
    }

    Ok(())
}

/// Turn a 1-based row number into the expense's session ID
fn resolve_row(storage: &Storage, row: usize) -> LedgerResult<ExpenseId> {
    row.checked_sub(1)
        .and_then(|index| storage.expenses.get_at(index))
        .map(|expense| expense.id)
        .ok_or_else(|| {
            ValidationError::InvalidRow(format!(
                "{} (there are {} expenses)",
                row,
                storage.expenses.len()
            ))
            .into()
        })
}
