//! Catalog service - the in-memory record list and its operations.
//!
//! The catalog owns the record sequence for the session and delegates
//! persistence to the injected [`CatalogStore`]. Mutations only touch
//! memory; persisting is an explicit [`Catalog::save`] call so the caller
//! decides whether a failed save is fatal (it never is for the CLI).

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{
    CatalogStats, Country, CountryFilter, CountryUpdate, SortKey, SortOrder, ValidationError,
    compute_stats, sort_records,
};
use crate::ports::{CatalogStore, LoadWarning, StoreError};

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record with the same name (case-insensitive) already exists.
    #[error("a country named '{0}' already exists")]
    DuplicateName(String),

    /// No record matches the given name.
    #[error("country not found: {0}")]
    NotFound(String),

    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load notices surfaced to the caller alongside the catalog.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of records loaded.
    pub loaded: usize,
    /// Rows skipped because a numeric field failed to parse.
    pub warnings: Vec<LoadWarning>,
    /// Whether the persisted file existed.
    pub existed: bool,
}

/// The in-memory, ordered record collection for one session.
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
    records: Vec<Country>,
}

impl Catalog {
    /// Build a catalog over an already-loaded record sequence.
    pub fn new(store: Arc<dyn CatalogStore>, records: Vec<Country>) -> Self {
        Self { store, records }
    }

    /// Build an empty catalog, used when loading failed and the session
    /// continues with best-effort data.
    pub fn empty(store: Arc<dyn CatalogStore>) -> Self {
        Self::new(store, Vec::new())
    }

    /// Load the persisted catalog through the store.
    pub fn open(store: Arc<dyn CatalogStore>) -> Result<(Self, LoadReport), CatalogError> {
        let outcome = store.load()?;
        let report = LoadReport {
            loaded: outcome.records.len(),
            warnings: outcome.warnings,
            existed: outcome.existed,
        };
        Ok((Self::new(store, outcome.records), report))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Country] {
        &self.records
    }

    /// Whether a record with this name exists (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|c| c.name_matches(name))
    }

    /// Find a record by exact name, case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.records.iter().find(|c| c.name_matches(name))
    }

    /// Append a record, enforcing name uniqueness.
    pub fn add(&mut self, country: Country) -> Result<(), CatalogError> {
        if self.contains(country.name()) {
            return Err(CatalogError::DuplicateName(country.name().to_string()));
        }
        self.records.push(country);
        Ok(())
    }

    /// Update population and/or area of the named record in place.
    ///
    /// Returns whether anything was set, so the caller can skip persisting
    /// a no-op update.
    pub fn update(&mut self, name: &str, update: &CountryUpdate) -> Result<bool, CatalogError> {
        let record = self
            .records
            .iter_mut()
            .find(|c| c.name_matches(name))
            .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))?;
        Ok(record.apply(update)?)
    }

    /// Case-insensitive substring search over record names.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Country> {
        let needle = term.trim().to_lowercase();
        self.records
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Records satisfying the given filter, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CountryFilter) -> Vec<&Country> {
        self.records.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Display-only reordered copy; the catalog order is untouched.
    #[must_use]
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Country> {
        sort_records(&self.records, key, order)
    }

    /// Aggregate statistics, or `None` for an empty catalog.
    #[must_use]
    pub fn stats(&self) -> Option<CatalogStats> {
        compute_stats(&self.records)
    }

    /// Persist the current record sequence through the store.
    pub fn save(&self) -> Result<(), CatalogError> {
        self.store.save(&self.records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{LoadOutcome, MockCatalogStore};

    fn country(name: &str, population: u64, area_km2: u64, continent: &str) -> Country {
        Country::new(name, population, area_km2, continent).unwrap()
    }

    /// A catalog over a mock store with no expectations: any store call
    /// fails the test, which is exactly what the no-persistence tests need.
    fn catalog_with(records: Vec<Country>) -> Catalog {
        Catalog::new(Arc::new(MockCatalogStore::new()), records)
    }

    fn spain_and_france() -> Vec<Country> {
        vec![
            country("Spain", 47_000_000, 505_000, "Europe"),
            country("France", 67_000_000, 551_000, "Europe"),
        ]
    }

    #[test]
    fn open_surfaces_the_load_report() {
        let mut store = MockCatalogStore::new();
        let outcome = LoadOutcome {
            records: spain_and_france(),
            warnings: vec![LoadWarning {
                line: 3,
                reason: "invalid population 'abc'".to_string(),
            }],
            existed: true,
        };
        store.expect_load().return_once(move || Ok(outcome));

        let (catalog, report) = Catalog::open(Arc::new(store)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.existed);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut catalog = catalog_with(Vec::new());
        catalog.add(country("Spain", 1, 1, "Europe")).unwrap();
        catalog.add(country("France", 2, 2, "Europe")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].name(), "Spain");
        assert_eq!(catalog.records()[1].name(), "France");
    }

    #[test]
    fn add_rejects_duplicate_name_case_insensitively() {
        let mut catalog = catalog_with(spain_and_france());
        let result = catalog.add(country("SPAIN", 5, 5, "Europe"));
        assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn update_changes_only_the_given_field() {
        let mut catalog = catalog_with(spain_and_france());
        let changed = catalog
            .update(
                "spain",
                &CountryUpdate {
                    population: Some(48_000_000),
                    area_km2: None,
                },
            )
            .unwrap();
        assert!(changed);
        let spain = catalog.find("Spain").unwrap();
        assert_eq!(spain.population(), 48_000_000);
        assert_eq!(spain.area_km2(), 505_000);
    }

    #[test]
    fn empty_update_reports_no_change() {
        let mut catalog = catalog_with(spain_and_france());
        let changed = catalog.update("Spain", &CountryUpdate::default()).unwrap();
        assert!(!changed);
    }

    #[test]
    fn update_of_unknown_name_is_not_found() {
        let mut catalog = catalog_with(spain_and_france());
        let result = catalog.update("Italy", &CountryUpdate::default());
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let catalog = catalog_with(spain_and_france());
        let matches = catalog.search("AN");
        let names: Vec<_> = matches.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Spain", "France"]);
        assert!(catalog.search("zz").is_empty());
    }

    #[test]
    fn filter_by_continent_matches_case_insensitively() {
        let catalog = catalog_with(spain_and_france());
        let matches = catalog.filter(&CountryFilter::by_continent("europe"));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn filter_by_population_range_is_inclusive() {
        let catalog = catalog_with(spain_and_france());
        let filter = CountryFilter::population_between(47_000_000, 67_000_000).unwrap();
        assert_eq!(catalog.filter(&filter).len(), 2);

        let filter = CountryFilter::population_between(47_000_001, 66_999_999).unwrap();
        assert!(catalog.filter(&filter).is_empty());
    }

    #[test]
    fn sorted_does_not_reorder_the_catalog() {
        let catalog = catalog_with(spain_and_france());
        let sorted = catalog.sorted(SortKey::Population, SortOrder::Descending);
        assert_eq!(sorted[0].name(), "France");
        // Insertion order survives.
        assert_eq!(catalog.records()[0].name(), "Spain");
    }

    #[test]
    fn stats_match_the_documented_example() {
        let catalog = catalog_with(spain_and_france());
        let stats = catalog.stats().unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.avg_population - 57_000_000.0).abs() < f64::EPSILON);
        assert_eq!(stats.most_populous.name(), "France");
        assert_eq!(stats.least_populous.name(), "Spain");
        assert_eq!(stats.by_continent.get("Europe"), Some(&2));
    }

    #[test]
    fn stats_on_empty_catalog_is_none() {
        let catalog = catalog_with(Vec::new());
        assert!(catalog.stats().is_none());
    }

    #[test]
    fn save_hands_the_records_to_the_store() {
        let mut store = MockCatalogStore::new();
        store
            .expect_save()
            .withf(|records: &[Country]| records.len() == 2 && records[0].name() == "Spain")
            .times(1)
            .returning(|_| Ok(()));

        let catalog = Catalog::new(Arc::new(store), spain_and_france());
        catalog.save().unwrap();
    }

    #[test]
    fn save_failure_is_surfaced_not_swallowed() {
        let mut store = MockCatalogStore::new();
        store
            .expect_save()
            .returning(|_| Err(StoreError::Storage("disk full".to_string())));

        let catalog = Catalog::new(Arc::new(store), spain_and_france());
        let result = catalog.save();
        assert!(matches!(result, Err(CatalogError::Store(_))));
        // The in-memory records are retained regardless.
        assert_eq!(catalog.len(), 2);
    }
}
