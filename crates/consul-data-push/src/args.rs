//! CLI argument definitions for pushing to Consul.

use crate::pusher::{PushOptions, DEFAULT_HTTP_ADDR};
use clap::Args;

/// Consul connection and push scheduling arguments.
#[derive(Args, Clone, Debug)]
pub struct PushArgs {
    /// Consul HTTP API address (e.g., "http://127.0.0.1:8500" or "127.0.0.1:8500")
    #[arg(long, env = "CONSUL_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    pub http_addr: String,

    /// ACL token to use for requests
    #[arg(long, env = "CONSUL_HTTP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Datacenter for resources that don't specify one
    #[arg(long)]
    pub datacenter: Option<String>,

    /// Number of concurrent requests that can be made
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub parallel: u16,

    /// Suppress output for individual resources
    #[arg(long)]
    pub quiet: bool,
}

impl PushArgs {
    pub fn to_options(&self) -> PushOptions {
        PushOptions {
            http_addr: self.http_addr.clone(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            datacenter: self.datacenter.clone().filter(|dc| !dc.is_empty()),
            parallel: usize::from(self.parallel),
            quiet: self.quiet,
        }
    }
}
