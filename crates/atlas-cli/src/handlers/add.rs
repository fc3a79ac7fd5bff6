//! Add command handler.
//!
//! Collects a new record interactively, validates it, appends it to the
//! catalog, and persists.

use anyhow::Result;

use atlas_core::domain::Country;
use atlas_core::services::CatalogError;

use crate::bootstrap::CliContext;
use crate::utils::input;

use super::persist;

/// Execute the add action.
///
/// Prompts for name, population, area, and continent. An empty or
/// duplicate name and an empty continent abort the action; numeric fields
/// re-prompt until a positive integer is entered.
pub fn execute(ctx: &mut CliContext) -> Result<()> {
    println!("\n=== ADD COUNTRY ===");

    let name = input::prompt_string("Country name")?;
    if name.is_empty() {
        println!("Error: the name cannot be empty.");
        return Ok(());
    }
    if ctx.catalog.contains(&name) {
        println!("Error: a country with that name already exists.");
        return Ok(());
    }

    let population = input::prompt_positive_integer("Population")?;
    let area_km2 = input::prompt_positive_integer("Area (km²)")?;

    let continent = input::prompt_string("Continent")?;
    if continent.is_empty() {
        println!("Error: the continent cannot be empty.");
        return Ok(());
    }

    let country = match Country::new(&name, population, area_km2, &continent) {
        Ok(country) => country,
        Err(e) => {
            println!("Error: {e}.");
            return Ok(());
        }
    };

    let added = country.name().to_string();
    match ctx.catalog.add(country) {
        Ok(()) => {
            println!("{added} added successfully.");
            persist(ctx);
        }
        Err(CatalogError::DuplicateName(name)) => {
            println!("Error: a country named '{name}' already exists.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
