//! Describe command handler.

use anyhow::Context;
use consul_data_core::Data;
use std::path::Path;

/// Load an artifact written by `consul-data generate`.
pub fn load_data(path: &Path) -> anyhow::Result<Data> {
    Data::from_file(path).with_context(|| format!("Failed to load data from {}", path.display()))
}

/// Run the describe command.
pub fn run_describe(path: &Path) -> anyhow::Result<()> {
    let data = load_data(path)?;
    println!("{}", data.summary());
    Ok(())
}
