//! Search command handler.
//!
//! Case-insensitive substring search over record names. Read-only.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::display_countries;
use crate::utils::input;

/// Execute the search action.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("\n=== SEARCH COUNTRIES ===");

    let term = input::prompt_string("Text to search for in the name")?;
    if term.is_empty() {
        println!("Please enter a search term.");
        return Ok(());
    }

    let matches = ctx.catalog.search(&term);
    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("\n{} result(s) found:", matches.len());
    display_countries(matches);
    Ok(())
}
