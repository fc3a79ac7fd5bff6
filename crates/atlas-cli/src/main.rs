//! CLI entry point - the composition root.
//!
//! The only place where infrastructure is wired together via bootstrap.
//! The menu loop routes choices to handlers which work on the catalog.

use atlas_cli::{CliConfig, bootstrap, menu};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = CliConfig::with_defaults();
    let mut ctx = bootstrap(&config)?;

    menu::run(&mut ctx)
}
