//! Data generator for consul-data.
//!
//! This crate turns a resolved configuration from `consul_data_core` into KV
//! entries and catalog nodes. Every generator draws from one seeded RNG, so a
//! run with the same seed and configuration is reproducible byte for byte.
//!
//! # Architecture
//!
//! ```text
//! Config (JSON / YAML)
//!        │ resolve()
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! └───┬─────────┬───┘
//!     │         │
//!     ▼         ▼
//!  kv::generate  catalog::generate
//!     │         │   (GenerationState: node names, node IDs,
//!     │         │    per node+service instance counters)
//!     ▼         ▼
//!   Data { kv, catalog }
//! ```
//!
//! # Example
//!
//! ```rust
//! use consul_data_core::Config;
//! use consul_data_generator::generate_all;
//!
//! let config = Config::from_json(r#"{
//!     "KV": { "NumEntries": 3 },
//!     "Catalog": { "NumNodes": 2 }
//! }"#).unwrap();
//!
//! let data = generate_all(&config, 42).unwrap();
//! assert_eq!(data.kv.len(), 3);
//! assert_eq!(data.catalog.len(), 2);
//! ```
//!
//! # Generators
//!
//! - `pet-name` - Words joined by a separator, with an optional prefix
//! - `random-b64` - Base64 of a random byte string
//! - `random-testing` - IPv4 addresses in 198.18.0.0/15
//! - UUID v4 for node IDs

pub mod catalog;
pub mod error;
pub mod generator;
pub mod generators;
pub mod kv;
pub mod state;

// Re-exports for convenience
pub use error::{GeneratorError, Stage, StageExt};
pub use generator::{generate_all, DataGenerator};
pub use generators::ValueGenerator;
