//! Country record type.
//!
//! A [`Country`] can only be built through [`Country::new`], which trims,
//! validates, and capitalizes the text fields. Any record held by a catalog
//! therefore satisfies all field constraints.

use serde::Serialize;
use thiserror::Error;

/// Validation failures rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("the name cannot be empty")]
    EmptyName,
    /// Continent is empty after trimming.
    #[error("the continent cannot be empty")]
    EmptyContinent,
    /// Population is not strictly positive.
    #[error("population must be greater than 0")]
    InvalidPopulation,
    /// Area is not strictly positive.
    #[error("area must be greater than 0")]
    InvalidArea,
}

/// A single catalog record.
///
/// Field order matches the persisted column order; the serde renames carry
/// the historical column names of the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Country name, capitalized, unique within a catalog (case-insensitive).
    #[serde(rename = "nombre")]
    name: String,
    /// Inhabitants, strictly positive.
    #[serde(rename = "poblacion")]
    population: u64,
    /// Surface in square kilometers, strictly positive.
    #[serde(rename = "superficie")]
    area_km2: u64,
    /// Continent name, capitalized.
    #[serde(rename = "continente")]
    continent: String,
}

impl Country {
    /// Build a validated record.
    ///
    /// Trims both text fields, rejects empty text and non-positive numbers,
    /// and capitalizes name and continent.
    pub fn new(
        name: &str,
        population: u64,
        area_km2: u64,
        continent: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let continent = continent.trim();
        if continent.is_empty() {
            return Err(ValidationError::EmptyContinent);
        }
        if population == 0 {
            return Err(ValidationError::InvalidPopulation);
        }
        if area_km2 == 0 {
            return Err(ValidationError::InvalidArea);
        }

        Ok(Self {
            name: capitalize(name),
            population,
            area_km2,
            continent: capitalize(continent),
        })
    }

    /// Country name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inhabitants.
    #[must_use]
    pub const fn population(&self) -> u64 {
        self.population
    }

    /// Surface in square kilometers.
    #[must_use]
    pub const fn area_km2(&self) -> u64 {
        self.area_km2
    }

    /// Continent name.
    #[must_use]
    pub fn continent(&self) -> &str {
        &self.continent
    }

    /// Case-insensitive exact match against a candidate name.
    #[must_use]
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.to_lowercase() == candidate.trim().to_lowercase()
    }

    /// Apply a partial update, returning whether anything was set.
    ///
    /// New values go through the same positivity checks as construction;
    /// a rejected update leaves the record untouched.
    pub fn apply(&mut self, update: &CountryUpdate) -> Result<bool, ValidationError> {
        if update.population == Some(0) {
            return Err(ValidationError::InvalidPopulation);
        }
        if update.area_km2 == Some(0) {
            return Err(ValidationError::InvalidArea);
        }

        let mut changed = false;
        if let Some(population) = update.population {
            self.population = population;
            changed = true;
        }
        if let Some(area_km2) = update.area_km2 {
            self.area_km2 = area_km2;
            changed = true;
        }
        Ok(changed)
    }
}

/// Partial update for the two mutable fields of a record.
///
/// `None` means "keep the current value".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountryUpdate {
    /// New population, if any.
    pub population: Option<u64>,
    /// New area in square kilometers, if any.
    pub area_km2: Option<u64>,
}

impl CountryUpdate {
    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.population.is_none() && self.area_km2.is_none()
    }
}

/// Uppercase the first character and lowercase the rest.
///
/// This is the catalog's only text normalization; it is idempotent, so
/// records loaded from disk come out exactly as they were saved.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out: String = first.to_uppercase().collect();
        out.push_str(&chars.as_str().to_lowercase());
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_capitalizes_name_and_continent() {
        let country = Country::new("spain", 47_000_000, 505_000, "EUROPE").unwrap();
        assert_eq!(country.name(), "Spain");
        assert_eq!(country.continent(), "Europe");
    }

    #[test]
    fn new_trims_text_fields() {
        let country = Country::new("  chile ", 19_000_000, 756_000, " south america ").unwrap();
        assert_eq!(country.name(), "Chile");
        assert_eq!(country.continent(), "South america");
    }

    #[test]
    fn new_rejects_empty_name() {
        assert_eq!(
            Country::new("   ", 1, 1, "Europe"),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn new_rejects_empty_continent() {
        assert_eq!(
            Country::new("Spain", 1, 1, ""),
            Err(ValidationError::EmptyContinent)
        );
    }

    #[test]
    fn new_rejects_zero_population_and_area() {
        assert_eq!(
            Country::new("Spain", 0, 1, "Europe"),
            Err(ValidationError::InvalidPopulation)
        );
        assert_eq!(
            Country::new("Spain", 1, 0, "Europe"),
            Err(ValidationError::InvalidArea)
        );
    }

    #[test]
    fn name_matches_is_case_insensitive() {
        let country = Country::new("Spain", 1, 1, "Europe").unwrap();
        assert!(country.name_matches("SPAIN"));
        assert!(country.name_matches("  spain "));
        assert!(!country.name_matches("France"));
    }

    #[test]
    fn apply_sets_only_provided_fields() {
        let mut country = Country::new("Spain", 10, 20, "Europe").unwrap();
        let changed = country
            .apply(&CountryUpdate {
                population: Some(30),
                area_km2: None,
            })
            .unwrap();
        assert!(changed);
        assert_eq!(country.population(), 30);
        assert_eq!(country.area_km2(), 20);
    }

    #[test]
    fn apply_empty_update_changes_nothing() {
        let mut country = Country::new("Spain", 10, 20, "Europe").unwrap();
        let changed = country.apply(&CountryUpdate::default()).unwrap();
        assert!(!changed);
        assert_eq!(country.population(), 10);
    }

    #[test]
    fn apply_rejects_zero_without_partial_write() {
        let mut country = Country::new("Spain", 10, 20, "Europe").unwrap();
        let result = country.apply(&CountryUpdate {
            population: Some(5),
            area_km2: Some(0),
        });
        assert_eq!(result, Err(ValidationError::InvalidArea));
        assert_eq!(country.population(), 10);
        assert_eq!(country.area_km2(), 20);
    }

    #[test]
    fn capitalize_lowercases_the_rest() {
        assert_eq!(capitalize("UNITED KINGDOM"), "United kingdom");
        assert_eq!(capitalize("spain"), "Spain");
        assert_eq!(capitalize(""), "");
        // Applying twice is a no-op.
        assert_eq!(capitalize(&capitalize("United Kingdom")), "United kingdom");
    }
}
