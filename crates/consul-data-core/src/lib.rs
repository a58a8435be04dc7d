//! Core types for consul-data.
//!
//! This crate holds everything that is shared between generation, the CLI and
//! the Consul push path:
//!
//! - [`Config`] - the user-facing configuration document (JSON or YAML) and its
//!   normalization into a [`ResolvedConfig`]
//! - [`StringGenerator`] / [`AddressGenerator`] - resolved generator settings
//! - [`Data`] - the generated artifact (KV entries plus catalog nodes)
//!
//! ## Configuration
//!
//! ```rust
//! use consul_data_core::Config;
//!
//! let config = Config::from_json(r#"{
//!     "KV": { "NumEntries": 10, "PetName": { "Segments": 2 } },
//!     "Catalog": { "NumNodes": 4, "MinServicesPerNode": 1, "MaxServicesPerNode": 3 }
//! }"#).unwrap();
//!
//! let resolved = config.resolve().unwrap();
//! assert_eq!(resolved.kv.num_entries, 10);
//! assert_eq!(resolved.catalog.num_nodes, 4);
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod generator_config;
pub mod kv;

pub use catalog::{CatalogGeneratorConfig, CatalogUserConfig};
pub use config::{Config, ConfigError, ResolvedConfig};
pub use data::{ArtifactError, Catalog, Data, DataSummary, Kv, KvValue, Node, Service, ServiceInstance};
pub use generator_config::{
    AddressGenerator, AddressKind, CountRange, NameKind, PayloadKind, PetName, PetNameUserConfig,
    RandomB64, RandomB64UserConfig, StringGenerator,
};
pub use kv::{KvGeneratorConfig, KvUserConfig};
