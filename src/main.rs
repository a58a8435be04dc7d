//! Command-line interface for consul-data
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Generate with defaults and write to stdout
//! consul-data generate
//!
//! # Reproducible generation from a config file
//! consul-data generate --config config.yaml --seed 42 data.json
//! ```
//!
//! ## Push
//! ```bash
//! # Generate fresh data, push it, and keep a copy
//! consul-data push --config config.json --output pushed.json
//!
//! # Push a previously generated file to a remote agent
//! CONSUL_HTTP_ADDR=consul.example.com:8500 CONSUL_HTTP_TOKEN=... \
//!   consul-data push --data data.json --parallel 16 --quiet
//! ```
//!
//! Logs go to stderr at `info` unless `RUST_LOG` says otherwise, so generated
//! JSON on stdout can be piped.

use clap::{Parser, Subcommand};
use consul_data::commands::{
    run_config, run_describe, run_generate, run_push, GenerateOpts, PushCommandArgs,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "consul-data")]
#[command(about = "A tool for generating Consul KV and catalog data and pushing it to Consul")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random Consul data
    Generate {
        #[command(flatten)]
        opts: GenerateOpts,

        /// File to write the data to (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// Push data to Consul
    ///
    /// By default random data is generated and pushed. Use --data to push a
    /// file written by `consul-data generate` instead.
    Push(PushCommandArgs),

    /// Describe the contents of a generated data file
    Describe {
        /// Path to the data file
        path: PathBuf,
    },

    /// Print the default generation configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    consul_data::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { opts, output } => run_generate(opts, output),
        Commands::Push(args) => run_push(args).await,
        Commands::Describe { path } => run_describe(&path),
        Commands::Config => run_config(),
    }
}
