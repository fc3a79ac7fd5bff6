//! CSV-backed implementation of the `CatalogStore` port.
//!
//! The persisted layout matches the historical data file: a header row
//! `nombre,poblacion,superficie,continente` followed by one row per record.
//! Fields containing the delimiter are quoted per standard CSV convention.
//!
//! Loading is tolerant so one bad line never loses the rest of the file:
//! rows whose numeric fields fail to parse are skipped and surfaced as
//! warnings; rows violating the field constraints (empty text, non-positive
//! numbers) are dropped quietly, as the data file has always worked.

use std::path::{Path, PathBuf};

use atlas_core::domain::Country;
use atlas_core::ports::{CatalogStore, LoadOutcome, LoadWarning, StoreError};

/// Column headers, in persisted order.
pub const HEADERS: [&str; 4] = ["nombre", "poblacion", "superficie", "continente"];

/// File-backed store that reads and writes the whole catalog per call.
///
/// The file is opened, fully read or written, and closed within each call;
/// the store itself holds only the path.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse one data row into a record, or skip it.
    ///
    /// Numeric parse failures push a warning; constraint violations only
    /// leave a debug trace, matching the historical load behavior.
    fn parse_row(
        row: &csv::StringRecord,
        line: u64,
        warnings: &mut Vec<LoadWarning>,
    ) -> Option<Country> {
        if row.len() < 4 {
            tracing::debug!(line, fields = row.len(), "row with too few fields skipped");
            return None;
        }
        let name = row.get(0).unwrap_or_default();
        let continent = row.get(3).unwrap_or_default();

        let population = parse_integer(row.get(1).unwrap_or_default(), "population", line, warnings)?;
        let area_km2 = parse_integer(row.get(2).unwrap_or_default(), "area", line, warnings)?;

        let (Ok(population), Ok(area_km2)) = (u64::try_from(population), u64::try_from(area_km2))
        else {
            tracing::debug!(line, "negative numeric field, row skipped");
            return None;
        };

        match Country::new(name, population, area_km2, continent) {
            Ok(country) => Some(country),
            Err(e) => {
                tracing::debug!(line, error = %e, "row failed validation, skipped");
                None
            }
        }
    }
}

/// Parse a numeric field, recording a warning on failure.
fn parse_integer(
    raw: &str,
    field: &'static str,
    line: u64,
    warnings: &mut Vec<LoadWarning>,
) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(line, field, raw, "numeric field failed to parse, row skipped");
            warnings.push(LoadWarning {
                line,
                reason: format!("invalid {field} '{raw}'"),
            });
            None
        }
    }
}

impl CatalogStore for CsvStore {
    fn load(&self) -> Result<LoadOutcome, StoreError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "catalog file not found, starting empty");
            return Ok(LoadOutcome::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let mut records = Vec::new();
        let mut warnings = Vec::new();
        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    // A row the reader itself could not decode; keep going
                    // with whatever parsed so far.
                    let line = e.position().map_or(0, csv::Position::line);
                    tracing::warn!(line, error = %e, "unreadable row skipped");
                    warnings.push(LoadWarning {
                        line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let line = row.position().map_or(0, csv::Position::line);
            if let Some(country) = Self::parse_row(&row, line, &mut warnings) {
                records.push(country);
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            loaded = records.len(),
            skipped = warnings.len(),
            "catalog read"
        );
        Ok(LoadOutcome {
            records,
            warnings,
            existed: true,
        })
    }

    fn save(&self, records: &[Country]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        // Written explicitly so an empty catalog still produces a header.
        writer
            .write_record(HEADERS)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "catalog written");
        Ok(())
    }
}
