//! CSV file persistence for the atlas catalog.
//!
//! Implements the [`CatalogStore`](atlas_core::ports::CatalogStore) port on
//! top of a flat delimited text file. The whole catalog is rewritten on
//! every save; loads are tolerant of malformed rows.

pub mod csv_store;

pub use csv_store::CsvStore;
