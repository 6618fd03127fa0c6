//! Report CLI commands

use crate::config::Settings;
use crate::display::format_breakdown;
use crate::error::LedgerResult;
use crate::reports::CategoryBreakdown;
use crate::storage::Storage;

use super::expense::FilterArgs;

/// Print the per-category breakdown of the (optionally filtered) expenses
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    filter: &FilterArgs,
) -> LedgerResult<()> {
    let filter = filter.to_filter()?;
    let breakdown = CategoryBreakdown::generate(
        filter
            .select(storage.expenses.all())
            .into_iter()
            .map(|(_, expense)| expense),
    );

    print!(
        "{}",
        format_breakdown(&breakdown, settings.currency_symbol.as_str())
    );
    Ok(())
}
