//! Catalog store trait definition.
//!
//! This port defines the interface for catalog persistence. Implementations
//! handle all storage details internally.

use std::fmt;

use thiserror::Error;

use crate::domain::Country;

/// Domain-facing errors for store operations.
///
/// Abstracts away the storage backend so services never see backend error
/// types in signatures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (filesystem, permissions, etc.).
    #[error("storage error: {0}")]
    Storage(String),

    /// Row encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A row skipped during load, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// 1-based line number in the persisted file.
    pub line: u64,
    /// Human-readable reason the row was skipped.
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Result of loading the persisted catalog.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Records that passed parsing and validation, in file order.
    pub records: Vec<Country>,
    /// Rows skipped because a numeric field failed to parse.
    pub warnings: Vec<LoadWarning>,
    /// Whether the persisted file existed at all.
    pub existed: bool,
}

/// Persistence port for the whole catalog.
///
/// `save` is always a full-file rewrite; `load` skips malformed rows and
/// continues rather than failing the whole load.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogStore {
    /// Load the persisted catalog.
    ///
    /// A missing file is not an error: the outcome is empty with
    /// `existed == false`. An unreadable file is.
    fn load(&self) -> Result<LoadOutcome, StoreError>;

    /// Overwrite the persisted file with the given records, header first.
    fn save(&self, records: &[Country]) -> Result<(), StoreError>;
}
