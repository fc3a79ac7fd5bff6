//! Core domain types and port definitions for atlas.
//!
//! This crate holds everything that is independent of how the catalog is
//! stored or presented: the record type with its construction-time
//! validation, the query and aggregation logic, the storage port, and the
//! catalog service that ties them together.

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CatalogStats, Country, CountryFilter, CountryUpdate, QueryError, SortKey, SortOrder,
    ValidationError, capitalize,
};
pub use ports::{CatalogStore, LoadOutcome, LoadWarning, StoreError};
pub use services::{Catalog, CatalogError, LoadReport};
