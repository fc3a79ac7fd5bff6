//! Record row display utilities for CLI output.

use atlas_core::domain::Country;

use super::tables::{group_digits, print_separator, truncate_string};

/// Width of a full record row, used for the surrounding separators.
pub const ROW_WIDTH: usize = 90;

/// Print a single catalog record as a fixed-width row.
pub fn display_country(country: &Country) {
    println!(
        "{:<25} | {:<12} | Population: {:>13} | Area: {:>11} km²",
        truncate_string(country.name(), 25),
        truncate_string(country.continent(), 12),
        group_digits(country.population()),
        group_digits(country.area_km2()),
    );
}

/// Print a sequence of records between separator lines.
pub fn display_countries<'a>(countries: impl IntoIterator<Item = &'a Country>) {
    print_separator(ROW_WIDTH);
    for country in countries {
        display_country(country);
    }
    print_separator(ROW_WIDTH);
}
