//! Push command handler.

use super::describe::load_data;
use super::generate::{generate_data, write_data, GenerateOpts};
use anyhow::Context;
use clap::Args;
use consul_data_push::{ConsulPusher, PushArgs};
use std::path::PathBuf;
use tracing::info;

/// Arguments for `consul-data push`.
#[derive(Args, Clone, Debug)]
pub struct PushCommandArgs {
    #[command(flatten)]
    pub generate: GenerateOpts,

    /// Path to data written by `consul-data generate` to push instead of generating new data
    #[arg(long, conflicts_with_all = ["output", "config", "seed"])]
    pub data: Option<PathBuf>,

    /// Path to write the generated data to once it has been pushed
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub push: PushArgs,
}

/// Run the push command.
pub async fn run_push(args: PushCommandArgs) -> anyhow::Result<()> {
    let data = match &args.data {
        Some(path) => load_data(path)?,
        None => {
            let opts = args.generate.clone();
            tokio::task::spawn_blocking(move || generate_data(&opts))
                .await
                .context("Data generation task failed")??
        }
    };

    let pusher =
        ConsulPusher::new(args.push.to_options()).context("Failed to create Consul API client")?;
    let metrics = pusher
        .push(&data)
        .await
        .context("Failed to push data to Consul")?;

    info!(
        kv_entries = metrics.kv_entries,
        nodes = metrics.nodes,
        service_instances = metrics.service_instances,
        duration_ms = metrics.duration.as_millis() as u64,
        "Push completed"
    );

    if let Some(output) = &args.output {
        write_data(&data, Some(output))?;
    }

    Ok(())
}
