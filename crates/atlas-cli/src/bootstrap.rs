//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the CSV store is instantiated here and handed to the
//! catalog. Handlers receive the fully-composed context and work on it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use atlas_core::services::{Catalog, LoadReport};
use atlas_store::CsvStore;

/// Default data file, resolved against the working directory. The name is
/// the historical one, so existing data files keep working.
pub const DEFAULT_DATA_FILE: &str = "paises.csv";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the persisted catalog file.
    pub data_file: PathBuf,
}

impl CliConfig {
    /// Create config with the default data file path.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Fully composed application context for menu handlers.
pub struct CliContext {
    /// The in-memory catalog, loaded at startup.
    pub catalog: Catalog,
    /// Path of the persisted file, kept for user-facing messages.
    pub data_file: PathBuf,
}

/// Bootstrap the CLI application.
///
/// Creates the CSV store, loads the catalog, and prints the load notices
/// (missing file, skipped rows, loaded count). A read failure degrades to
/// an empty catalog rather than aborting; the operator can still work and
/// save.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let store = Arc::new(CsvStore::new(&config.data_file));

    let catalog = match Catalog::open(store.clone()) {
        Ok((catalog, report)) => {
            report_load(&config.data_file, &report);
            catalog
        }
        Err(e) => {
            tracing::error!(error = %e, path = %config.data_file.display(), "reading catalog failed");
            println!(
                "Error reading {}: {e}. Starting with an empty catalog.",
                config.data_file.display()
            );
            Catalog::empty(store)
        }
    };

    Ok(CliContext {
        catalog,
        data_file: config.data_file.clone(),
    })
}

fn report_load(data_file: &Path, report: &LoadReport) {
    if !report.existed {
        println!(
            "{} not found. A new file will be created on save.",
            data_file.display()
        );
        return;
    }
    for warning in &report.warnings {
        println!("Skipped {warning}");
    }
    println!("Catalog loaded: {} countries.", report.loaded);
}
