//! Sort command handler.
//!
//! Produces a reordered copy for display; the catalog itself keeps its
//! insertion order and nothing is persisted.

use anyhow::Result;

use atlas_core::domain::{SortKey, SortOrder};

use crate::bootstrap::CliContext;
use crate::presentation::display_countries;
use crate::utils::input;

/// Execute the sort action.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("\n=== SORT COUNTRIES ===");
    println!("1. By name");
    println!("2. By population");
    println!("3. By area");

    let choice = input::prompt_string("Criterion")?;
    let Some(key) = parse_sort_key(&choice) else {
        println!("Invalid option.");
        return Ok(());
    };

    let order = if input::prompt_confirmation("Descending order?")? {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    if ctx.catalog.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    let sorted = ctx.catalog.sorted(key, order);
    println!("\nCatalog sorted by {} ({}):", key.label(), order.label());
    display_countries(&sorted);
    Ok(())
}

/// Map a sub-menu choice to a sort key.
fn parse_sort_key(choice: &str) -> Option<SortKey> {
    match choice {
        "1" => Some(SortKey::Name),
        "2" => Some(SortKey::Population),
        "3" => Some(SortKey::Area),
        _ => None,
    }
}
