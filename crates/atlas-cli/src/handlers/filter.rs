//! Filter command handler.
//!
//! Sub-menu over the three filter modes: continent, population range, and
//! area range. Range input is single-shot; a bad bound aborts the action
//! instead of re-prompting.

use anyhow::Result;

use atlas_core::domain::CountryFilter;

use crate::bootstrap::CliContext;
use crate::presentation::display_countries;
use crate::utils::input;

/// Execute the filter action.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("\n=== FILTER COUNTRIES ===");
    println!("1. By continent");
    println!("2. By population range");
    println!("3. By area range");

    let choice = input::prompt_string("Option")?;
    let filter = match choice.as_str() {
        "1" => {
            let continent = input::prompt_string("Continent")?;
            CountryFilter::by_continent(continent)
        }
        "2" => {
            let Some((min, max)) = prompt_range("population")? else {
                return Ok(());
            };
            match CountryFilter::population_between(min, max) {
                Ok(filter) => filter,
                Err(e) => {
                    println!("Error: {e}.");
                    return Ok(());
                }
            }
        }
        "3" => {
            let Some((min, max)) = prompt_range("area")? else {
                return Ok(());
            };
            match CountryFilter::area_between(min, max) {
                Ok(filter) => filter,
                Err(e) => {
                    println!("Error: {e}.");
                    return Ok(());
                }
            }
        }
        _ => {
            println!("Invalid option.");
            return Ok(());
        }
    };

    let matches = ctx.catalog.filter(&filter);
    if matches.is_empty() {
        println!("No countries matched that criterion.");
        return Ok(());
    }

    println!("\n{} country(ies) found:", matches.len());
    display_countries(matches);
    Ok(())
}

/// Read an inclusive range. `None` means a bound was not a valid integer
/// and the action should abort.
fn prompt_range(field: &str) -> Result<Option<(u64, u64)>> {
    let Ok(min) = input::prompt_string(&format!("Minimum {field}"))?.parse::<u64>() else {
        println!("Please enter valid numbers.");
        return Ok(None);
    };
    let Ok(max) = input::prompt_string(&format!("Maximum {field}"))?.parse::<u64>() else {
        println!("Please enter valid numbers.");
        return Ok(None);
    };
    Ok(Some((min, max)))
}
