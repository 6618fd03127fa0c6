//! Expense Ledger - personal expense tracking
//!
//! Keeps an ordered list of expenses (date, amount, category, description)
//! in a JSON file, with filtering, per-category totals and CSV export.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: error types
//! - `models`: expense, money, ids and the category set
//! - `storage`: JSON file storage
//! - `services`: add, delete, edit, clear, list and export
//! - `reports`: totals and category breakdown
//! - `export`: CSV writer
//! - `audit`: append-only change log
//! - `display` and `cli`: the command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{LedgerPaths, Settings};
//! use expense_ledger::services::ExpenseService;
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load()?;
//!
//! ExpenseService::new(&mut storage).add("12.50", "Food", "lunch")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
