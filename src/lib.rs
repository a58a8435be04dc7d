//! consul-data library
//!
//! Generates synthetic Consul KV and catalog data and pushes it into a Consul
//! cluster for load testing and demos.
//!
//! # Crates
//!
//! - `consul_data_core` - configuration, normalization and the artifact types
//! - `consul_data_generator` - seeded, reproducible data generation
//! - `consul_data_push` - registering an artifact through Consul's HTTP API
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate data with the default configuration
//! consul-data generate --seed 42 data.json
//!
//! # Summarize a generated file
//! consul-data describe data.json
//!
//! # Push a generated file to a local agent, 8 requests at a time
//! consul-data push --data data.json --parallel 8
//!
//! # Print the default configuration as a starting point
//! consul-data config > config.json
//! ```

pub mod commands;
pub mod logging;

pub use commands::{GenerateOpts, PushCommandArgs};
