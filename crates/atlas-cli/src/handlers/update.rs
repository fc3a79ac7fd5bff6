//! Update command handler.
//!
//! Locates a record by name and rewrites its population and/or area.

use anyhow::Result;

use atlas_core::domain::CountryUpdate;

use crate::bootstrap::CliContext;
use crate::presentation::group_digits;
use crate::utils::input;

use super::persist;

/// Execute the update action.
///
/// Blank input keeps the current value for a field. Nothing is persisted
/// unless at least one field was entered.
pub fn execute(ctx: &mut CliContext) -> Result<()> {
    println!("\n=== UPDATE COUNTRY ===");

    let name = input::prompt_string("Country to update")?;
    let Some(country) = ctx.catalog.find(&name) else {
        println!("Country not found.");
        return Ok(());
    };

    println!("Found: {}", country.name());
    println!("Current population: {}", group_digits(country.population()));
    println!("Current area:       {} km²", group_digits(country.area_km2()));

    let update = CountryUpdate {
        population: input::prompt_positive_integer_or_keep("New population (Enter to keep)")?,
        area_km2: input::prompt_positive_integer_or_keep("New area (Enter to keep)")?,
    };

    if update.is_empty() {
        println!("No changes made.");
        return Ok(());
    }

    if ctx.catalog.update(&name, &update)? {
        println!("Country updated.");
        persist(ctx);
    } else {
        println!("No changes made.");
    }

    Ok(())
}
