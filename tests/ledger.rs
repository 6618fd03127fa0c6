//! Behaviour of the ledger as a whole: validation, aggregation, filtering,
//! deletion of duplicates, edit semantics and persistence across sessions.

use chrono::{Local, NaiveDate};
use tempfile::TempDir;

use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::error::ValidationError;
use expense_ledger::models::{Expense, Money};
use expense_ledger::reports::{total_of, CategoryBreakdown};
use expense_ledger::services::{EditExpenseInput, ExpenseFilter, ExpenseService, Selection};
use expense_ledger::storage::Storage;

fn open(dir: &TempDir) -> Storage {
    let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
    let mut storage = Storage::new(paths, &Settings::default()).unwrap();
    storage.load().unwrap();
    storage
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn seed(storage: &mut Storage, records: &[(NaiveDate, i64, &str, &str)]) {
    for (date, cents, category, description) in records {
        storage.expenses.append(Expense::new(
            *date,
            Money::from_cents(*cents),
            *category,
            *description,
        ));
    }
    storage.save().unwrap();
}

#[test]
fn add_accepts_only_valid_input() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    let mut service = ExpenseService::new(&mut storage);

    let added = service.add("12.50", "Food", "lunch").unwrap();
    assert_eq!(added.date, Local::now().date_naive());
    assert_eq!(added.amount, Money::from_cents(1250));

    for bad in ["", "twelve", "1.2.3", "12,50"] {
        let err = service.add(bad, "Food", "").unwrap_err();
        assert!(
            matches!(err.as_validation(), Some(ValidationError::InvalidAmount(_))),
            "{bad:?} should be rejected"
        );
    }
    let err = service.add("5", "", "").unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::EmptyCategory));

    assert_eq!(storage.expenses.len(), 1);
}

#[test]
fn total_equals_sum_of_breakdown() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    seed(
        &mut storage,
        &[
            (date(1, 1), 1250, "Food", ""),
            (date(1, 2), 333, "Transport", ""),
            (date(1, 3), 1, "Food", ""),
            (date(1, 4), 9999, "Entertainment", ""),
        ],
    );

    let all = storage.expenses.all();
    let breakdown = CategoryBreakdown::generate(all);
    let summed: Money = breakdown.iter().map(|(_, total)| total).sum();

    assert_eq!(summed, total_of(all));
    assert_eq!(breakdown.total(), total_of(all));
    assert_eq!(total_of(all).cents(), 11583);
}

#[test]
fn filter_is_exact_and_ordered() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    seed(
        &mut storage,
        &[
            (date(3, 1), 100, "Food", "a"),
            (date(3, 5), 200, "Transport", "b"),
            (date(3, 10), 300, "Food", "c"),
            (date(3, 15), 400, "Food", "d"),
        ],
    );

    let filter = ExpenseFilter::new()
        .category("Food")
        .date_range(date(3, 5), date(3, 15));
    let selected = filter.apply(storage.expenses.all());

    let descriptions: Vec<_> = selected.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["c", "d"]);

    let inverted = ExpenseFilter::new().date_range(date(3, 15), date(3, 1));
    assert!(inverted.apply(storage.expenses.all()).is_empty());
}

#[test]
fn deleting_one_of_two_duplicates_keeps_the_other() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    seed(
        &mut storage,
        &[
            (date(2, 1), 500, "Food", "snack"),
            (date(2, 1), 500, "Food", "snack"),
        ],
    );
    let key = storage.expenses.all()[0].key();

    ExpenseService::new(&mut storage)
        .delete_selected(&[Selection::Fields(key.clone())])
        .unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.expenses.len(), 1);
    assert_eq!(reopened.expenses.all()[0].key(), key);
}

#[test]
fn records_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut storage = open(&dir);
        let mut service = ExpenseService::new(&mut storage);
        service.add("3.10", "Transport", "bus, \"express\"").unwrap();
        service.add("0.99", "Music", "").unwrap();
    }

    let storage = open(&dir);
    let records = storage.expenses.all();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].amount.cents(), 310);
    assert_eq!(records[0].description, "bus, \"express\"");
    assert_eq!(records[1].category, "Music");
    assert!(storage.categories.contains("Music"));
}

#[test]
fn largest_amount_survives_a_restart_and_sums() {
    let dir = TempDir::new().unwrap();
    {
        let mut storage = open(&dir);
        let mut service = ExpenseService::new(&mut storage);
        service.add("1", "Food", "keep me").unwrap();
        service.add("9999999999999.99", "Other", "").unwrap();
        service.add("9999999999999.99", "Other", "").unwrap();

        let err = service.add("10000000000000", "Other", "").unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidAmount(_))
        ));
    }

    let storage = open(&dir);
    let records = storage.expenses.all();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].description, "keep me");
    assert_eq!(records[1].amount, Money::MAX);
    assert_eq!(records[2].amount, Money::MAX);

    let total = total_of(records);
    assert_eq!(total.cents(), 2 * Money::MAX.cents() + 100);
    assert_eq!(
        CategoryBreakdown::generate(records).get("Other"),
        Some(Money::from_cents(2 * Money::MAX.cents()))
    );
}

#[test]
fn record_file_holds_four_fields_per_expense() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    seed(&mut storage, &[(date(5, 20), 1250, "Food", "lunch")]);

    let raw = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = value[0].as_object().unwrap();

    assert_eq!(record.len(), 4);
    assert_eq!(record["date"], "2024-05-20");
    assert_eq!(record["amount"], 12.5);
    assert_eq!(record["category"], "Food");
    assert_eq!(record["description"], "lunch");
}

#[test]
fn unreadable_record_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("expenses.json"), "not json").unwrap();

    let paths = LedgerPaths::with_base_dir(dir.path().to_path_buf());
    let mut storage = Storage::new(paths, &Settings::default()).unwrap();

    assert!(storage.load().unwrap_err().is_persistence());
    assert!(storage.expenses.is_empty());
}

#[test]
fn empty_store_aggregates_to_nothing() {
    let dir = TempDir::new().unwrap();
    let storage = open(&dir);

    assert!(total_of(storage.expenses.all()).is_zero());
    assert!(CategoryBreakdown::generate(storage.expenses.all()).is_empty());
}

#[test]
fn edit_keeps_the_date() {
    let dir = TempDir::new().unwrap();
    let mut storage = open(&dir);
    seed(&mut storage, &[(date(4, 2), 700, "Food", "pizza")]);
    let id = storage.expenses.all()[0].id;

    let updated = ExpenseService::new(&mut storage)
        .edit(
            Some(&Selection::Id(id)),
            EditExpenseInput {
                amount: Some(Money::from_cents(650)),
                category: Some("Takeaway".into()),
                description: None,
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.date, date(4, 2));
    assert_eq!(updated.description, "pizza");

    let reopened = open(&dir);
    let record = &reopened.expenses.all()[0];
    assert_eq!(record.date, date(4, 2));
    assert_eq!(record.amount.cents(), 650);
    assert_eq!(record.category, "Takeaway");
}
