//! Menu action handlers that work on the catalog.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &mut CliContext) -> Result<()>`
//!   (read-only actions take `&CliContext`)
//! - Thin wrappers that:
//!   1. Prompt for and validate input
//!   2. Call catalog operations
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the store directly
//! - Contain query or aggregation logic

use crate::bootstrap::CliContext;

pub mod add;
pub mod filter;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;

/// Save the catalog and report the outcome.
///
/// A failed save keeps the in-memory catalog; the operator can fix the
/// problem and retry through the menu.
pub fn persist(ctx: &CliContext) {
    match ctx.catalog.save() {
        Ok(()) => println!("Catalog saved to {}.", ctx.data_file.display()),
        Err(e) => {
            tracing::error!(error = %e, path = %ctx.data_file.display(), "saving catalog failed");
            println!("Error saving {}: {e}", ctx.data_file.display());
        }
    }
}
