//! Push generated consul-data artifacts into Consul.
//!
//! This crate provides the `ConsulPusher`, which writes KV entries through
//! `/v1/kv/<key>` and registers nodes and service instances through
//! `/v1/catalog/register`. Registrations for one node are always sent in
//! order (node first, then its instances); independent work may run
//! concurrently up to the configured parallelism.

pub mod args;
pub mod error;
pub mod pusher;
pub mod registration;

pub use args::PushArgs;
pub use error::PushError;
pub use pusher::{ConsulPusher, PushMetrics, PushOptions, DEFAULT_HTTP_ADDR, TOKEN_HEADER};
pub use registration::{AgentService, CatalogRegistration};
