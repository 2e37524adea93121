//! `envsnap resolve` — one-off model identifier lookup.

use anyhow::Result;

use envsnap_core::model;

/// Print the marketing name for `identifier` (or the identifier itself
/// when unknown).
pub fn run(identifier: &str) -> Result<()> {
    println!("{}", model::resolve(identifier));
    Ok(())
}
