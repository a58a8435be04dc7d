//! Generate command handler.

use anyhow::Context;
use clap::Args;
use consul_data_core::{Config, Data};
use consul_data_generator::generate_all;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Arguments controlling data generation, shared by `generate` and `push`.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateOpts {
    /// Path to the configuration to use for generating data (JSON, or YAML for .yaml/.yml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Seed for the pseudo-random generator instead of the current time
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Seed derived from the current time.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Load the configuration at `path`, or the default configuration.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Generate a full artifact as described by `opts`.
pub fn generate_data(opts: &GenerateOpts) -> anyhow::Result<Data> {
    let config = load_config(opts.config.as_deref())?;

    let seed = opts.seed.unwrap_or_else(seed_from_clock);
    info!("Using random seed {} (pass --seed {} to reproduce)", seed, seed);

    let data = generate_all(&config, seed).context("Failed to generate Consul data")?;

    let summary = data.summary();
    info!(
        keys = summary.keys,
        nodes = summary.nodes,
        services = summary.services,
        instances = summary.service_instances,
        "Generated Consul data"
    );

    Ok(data)
}

/// Write `data` to `path`, or to stdout when no path is given.
pub fn write_data(data: &Data, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            data.write_to_file(path).with_context(|| {
                format!("Failed to write serialized Consul data to {}", path.display())
            })?;
            info!("Consul data written to {}", path.display());
        }
        None => {
            let serialized = data
                .to_json_pretty()
                .context("Failed to serialize Consul data")?;
            println!("{serialized}");
        }
    }
    Ok(())
}

/// Run the generate command.
pub fn run_generate(opts: GenerateOpts, output: Option<PathBuf>) -> anyhow::Result<()> {
    let data = generate_data(&opts)?;
    write_data(&data, output.as_deref())
}
