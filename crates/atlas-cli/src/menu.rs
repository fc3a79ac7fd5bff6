//! Main menu loop.
//!
//! Reads a choice, dispatches to the matching handler, and repeats until
//! the operator picks save-and-exit. Unknown choices re-display the menu
//! with a notice; no action aborts the process.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::handlers;
use crate::utils::input;

/// One parsed main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new record.
    Add,
    /// Update population/area of an existing record.
    Update,
    /// Substring search over names.
    Search,
    /// Filter by continent or numeric range.
    Filter,
    /// Display a sorted copy.
    Sort,
    /// Aggregate statistics.
    Stats,
    /// Final save, then terminate.
    SaveAndExit,
}

impl MenuChoice {
    /// Parse the operator's raw menu input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Update),
            "3" => Some(Self::Search),
            "4" => Some(Self::Filter),
            "5" => Some(Self::Sort),
            "6" => Some(Self::Stats),
            "0" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// Run the menu loop until save-and-exit.
pub fn run(ctx: &mut CliContext) -> Result<()> {
    loop {
        print_menu();
        let choice = input::prompt_string("Choose an option")?;

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => handlers::add::execute(ctx)?,
            Some(MenuChoice::Update) => handlers::update::execute(ctx)?,
            Some(MenuChoice::Search) => handlers::search::execute(ctx)?,
            Some(MenuChoice::Filter) => handlers::filter::execute(ctx)?,
            Some(MenuChoice::Sort) => handlers::sort::execute(ctx)?,
            Some(MenuChoice::Stats) => handlers::stats::execute(ctx)?,
            Some(MenuChoice::SaveAndExit) => {
                handlers::persist(ctx);
                println!("Goodbye!");
                return Ok(());
            }
            None => println!("Invalid option. Try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(70));
    println!("        COUNTRY CATALOG - MAIN MENU");
    println!("{}", "=".repeat(70));
    println!("1. Add country");
    println!("2. Update population/area");
    println!("3. Search countries");
    println!("4. Filter countries");
    println!("5. Sort countries");
    println!("6. Statistics");
    println!("0. Save and exit");
    println!("{}", "=".repeat(70));
}
