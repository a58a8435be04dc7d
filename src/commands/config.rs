//! Config command handler.

use anyhow::Context;
use consul_data_core::Config;

/// The default configuration as pretty-printed JSON.
pub fn default_config_json() -> anyhow::Result<String> {
    Config::default()
        .to_json_pretty()
        .context("Failed to serialize default configuration")
}

/// Run the config command.
pub fn run_config() -> anyhow::Result<()> {
    println!("{}", default_config_json()?);
    Ok(())
}
