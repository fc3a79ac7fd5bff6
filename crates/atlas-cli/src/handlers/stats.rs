//! Statistics command handler.
//!
//! Aggregates the whole catalog: totals, means, population extremes, and
//! per-continent counts.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::group_digits;

/// Execute the statistics action.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let Some(stats) = ctx.catalog.stats() else {
        println!("No data.");
        return Ok(());
    };

    println!("\n=== STATISTICS ===");
    println!("Total countries    : {}", stats.count);
    println!(
        "Average population : {} inhabitants",
        group_digits(round_to_u64(stats.avg_population))
    );
    println!(
        "Average area       : {} km²",
        group_digits(round_to_u64(stats.avg_area_km2))
    );
    println!(
        "Most populous      : {} ({} inhabitants)",
        stats.most_populous.name(),
        group_digits(stats.most_populous.population())
    );
    println!(
        "Least populous     : {} ({} inhabitants)",
        stats.least_populous.name(),
        group_digits(stats.least_populous.population())
    );

    println!("\nCountries by continent:");
    for (continent, count) in &stats.by_continent {
        println!("  {continent}: {count}");
    }

    Ok(())
}

/// Round a mean for display. Catalog means are always positive.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u64(value: f64) -> u64 {
    value.round() as u64
}
