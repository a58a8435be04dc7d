//! The configuration document and its normalization.
//!
//! A config file has two sections, `KV` and `Catalog`. Every field is optional.
//! A missing `NumEntries` or `NumNodes` (or a missing section) generates
//! nothing for that section; other missing fields take the documented
//! defaults, out-of-range counts are replaced by their defaults, and inverted
//! ranges are clamped. Only unknown generator kinds are rejected.
//!
//! [`Config::default`] is what runs without a config file and generates 1024
//! entries and 1024 nodes.

use crate::catalog::{CatalogGeneratorConfig, CatalogUserConfig};
use crate::kv::{KvGeneratorConfig, KvUserConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading and normalization.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unknown generator kind selector
    #[error("Invalid {field}: {value:?}")]
    InvalidKind { field: &'static str, value: String },

    /// Payload size range that cannot produce any size
    #[error("Invalid {field} size range: min {min}, max {max} (min must be at least 1 and max at least min)")]
    InvalidSizeRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    /// Pet name generator without any words
    #[error("Invalid {field}: pet names need at least one segment")]
    InvalidSegments { field: &'static str },
}

/// The user-facing configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "KV", default = "KvUserConfig::absent")]
    pub kv: KvUserConfig,

    #[serde(rename = "Catalog", default = "CatalogUserConfig::absent")]
    pub catalog: CatalogUserConfig,
}

impl Config {
    /// Load a configuration file. Files ending in `.yaml` or `.yml` are parsed
    /// as YAML, everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Normalize both sections into generator configuration.
    ///
    /// Both sections are resolved before anything is generated, so a bad
    /// catalog setting fails the run before any KV data is produced.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let resolved = ResolvedConfig {
            kv: self.kv.resolve()?,
            catalog: self.catalog.resolve()?,
        };

        tracing::info!(
            num_entries = resolved.kv.num_entries,
            num_nodes = resolved.catalog.num_nodes,
            "Resolved generator configuration"
        );

        Ok(resolved)
    }
}

/// Fully resolved configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub kv: KvGeneratorConfig,
    pub catalog: CatalogGeneratorConfig,
}

impl ResolvedConfig {
    /// Check every generator for parameters that would fail mid-run.
    ///
    /// Configs produced by [`Config::resolve`] always pass; this guards
    /// configs assembled by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.kv.validate()?;
        self.catalog.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator_config::{CountRange, PetName, RandomB64, StringGenerator};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_generates_nothing() {
        let parsed = Config::from_json("{}").unwrap().resolve().unwrap();
        assert_eq!(parsed.kv.num_entries, 0);
        assert_eq!(parsed.catalog.num_nodes, 0);

        let defaults = Config::default().resolve().unwrap();
        assert_eq!(parsed.kv.key, defaults.kv.key);
        assert_eq!(parsed.catalog.services_per_node, defaults.catalog.services_per_node);
    }

    #[test]
    fn test_catalog_only_document_has_no_kv_entries() {
        let config = Config::from_json(r#"{ "Catalog": { "NumNodes": 2 } }"#).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.kv.num_entries, 0);
        assert_eq!(resolved.catalog.num_nodes, 2);

        let config = Config::from_yaml("KV:\n  NumEntries: 5\n").unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.kv.num_entries, 5);
        assert_eq!(resolved.catalog.num_nodes, 0);
    }

    #[test]
    fn test_default_config_values() {
        let defaults = Config::default().resolve().unwrap();

        assert_eq!(defaults.kv.num_entries, 1024);
        assert_eq!(defaults.catalog.num_nodes, 1024);
        assert_eq!(defaults.catalog.services_per_node, CountRange::new(8, 32));
        assert_eq!(defaults.catalog.instances_per_service, CountRange::new(1, 1));
        assert_eq!(defaults.catalog.meta_per_node, CountRange::new(4, 8));
        assert_eq!(defaults.catalog.meta_per_instance, CountRange::new(4, 8));
        assert_eq!(
            defaults.kv.value,
            StringGenerator::RandomB64(RandomB64 {
                min_size: 64,
                max_size: 1024
            })
        );
    }

    #[test]
    fn test_parse_json_sections() {
        let json = r#"{
            "KV": {
                "NumEntries": 3,
                "KeyType": "pet-name",
                "ValueType": "random-b64",
                "PetName": { "Segments": 2, "Separator": "_" },
                "RandomB64": { "MinSize": 4, "MaxSize": 5 }
            },
            "Catalog": {
                "NumNodes": 1,
                "MinServicesPerNode": 2,
                "MaxServicesPerNode": 2,
                "MinInstancesPerService": 3,
                "MaxInstancesPerService": 3
            }
        }"#;
        let resolved = Config::from_json(json).unwrap().resolve().unwrap();

        assert_eq!(resolved.kv.num_entries, 3);
        assert_eq!(
            resolved.kv.key,
            StringGenerator::PetName(PetName {
                prefix: String::new(),
                segments: 2,
                separator: "_".to_string(),
            })
        );
        assert_eq!(
            resolved.kv.value,
            StringGenerator::RandomB64(RandomB64 {
                min_size: 4,
                max_size: 5
            })
        );
        assert_eq!(resolved.catalog.num_nodes, 1);
        assert_eq!(resolved.catalog.services_per_node, CountRange::exactly(2));
        assert_eq!(resolved.catalog.instances_per_service, CountRange::exactly(3));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let config = Config::from_json(r#"{ "Catalog": { "AddressType": "ipv6" } }"#).unwrap();
        let err = config.resolve().unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::InvalidKind { field: "Catalog.AddressType", value } if value == "ipv6"
        ));
    }

    #[test]
    fn test_unknown_kv_value_kind_names_value_field() {
        let config = Config::from_json(r#"{ "KV": { "ValueType": "zeros" } }"#).unwrap();
        let err = config.resolve().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidKind {
                field: "KV.ValueType",
                ..
            }
        ));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "KV:\n  NumEntries: 7\nCatalog:\n  NumNodes: 2\n  NodePetNames:\n    Prefix: node-"
        )
        .unwrap();

        let resolved = Config::from_file(file.path()).unwrap().resolve().unwrap();
        assert_eq!(resolved.kv.num_entries, 7);
        assert_eq!(resolved.catalog.num_nodes, 2);
        match resolved.catalog.node_name {
            StringGenerator::PetName(pet_name) => assert_eq!(pet_name.prefix, "node-"),
            other => panic!("Expected pet-name generator, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "KV": {{ "NumEntries": 0 }} }}"#).unwrap();

        let resolved = Config::from_file(file.path()).unwrap().resolve().unwrap();
        assert_eq!(resolved.kv.num_entries, 0);
    }

    #[test]
    fn test_invalid_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_default_config_round_trips_through_json() {
        let config = Config::default();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"NumEntries\": 1024"));
        assert!(json.contains("\"MetaValueType\": \"random-b64\""));
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_hand_built_config() {
        let mut resolved = Config::default().resolve().unwrap();
        resolved.catalog.meta_value = StringGenerator::RandomB64(RandomB64 {
            min_size: 0,
            max_size: 0,
        });

        let err = resolved.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSizeRange {
                field: "Catalog.MetaValueRandomB64",
                ..
            }
        ));
    }
}
