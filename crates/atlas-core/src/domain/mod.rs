//! Domain types for the country catalog.
//!
//! These types represent catalog records and queries over them,
//! independent of any infrastructure concerns (file layout, terminal).

pub mod country;
pub mod query;

pub use country::{Country, CountryUpdate, ValidationError, capitalize};
pub use query::{
    CatalogStats, CountryFilter, QueryError, SortKey, SortOrder, compute_stats, sort_records,
};
