//! Category CLI command

use crate::error::LedgerResult;
use crate::storage::Storage;

/// List known category labels in the order they were first seen
pub fn handle_categories_command(storage: &Storage) -> LedgerResult<()> {
    print!("{}", format_categories(storage));
    Ok(())
}

fn format_categories(storage: &Storage) -> String {
    let mut output = format!("Categories ({}):\n", storage.categories.len());
    for name in storage.categories.iter() {
        output.push_str(&format!("  {}\n", name));
    }
    output
}
