//! Interactive CLI for the atlas country catalog.
//!
//! The binary is a single menu loop over an in-memory catalog: bootstrap
//! loads the persisted file, each menu action runs a handler, and the
//! save-and-exit choice writes the file back. No action is fatal to the
//! process; errors are reported and the menu comes back.

pub mod bootstrap;
pub mod handlers;
pub mod menu;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use menu::MenuChoice;
