//! Catalog section of the configuration.

use crate::config::ConfigError;
use crate::generator_config::{
    AddressGenerator, AddressKind, CountRange, NameKind, PayloadKind, PetNameUserConfig,
    RandomB64UserConfig, StringGenerator,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_NODES: usize = 1024;
pub const DEFAULT_MIN_SERVICES_PER_NODE: usize = 8;
pub const DEFAULT_MAX_SERVICES_PER_NODE: usize = 32;
pub const DEFAULT_MIN_INSTANCES_PER_SERVICE: usize = 1;
pub const DEFAULT_MAX_INSTANCES_PER_SERVICE: usize = 1;
pub const DEFAULT_MIN_META_PER_NODE: usize = 4;
pub const DEFAULT_MAX_META_PER_NODE: usize = 8;
pub const DEFAULT_MIN_META_PER_SERVICE: usize = 4;
pub const DEFAULT_MAX_META_PER_SERVICE: usize = 8;

/// Catalog generation options as written in a config file.
///
/// Range fields are `[min, max)`; a non-positive value takes the default and a
/// `max` below `min` is raised to `min`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CatalogUserConfig {
    /// Number of nodes to generate. Absent from a config file means 0;
    /// negative means 1024.
    #[serde(default)]
    pub num_nodes: i64,
    pub min_services_per_node: i64,
    pub max_services_per_node: i64,
    pub min_instances_per_service: i64,
    pub max_instances_per_service: i64,
    pub min_meta_per_node: i64,
    pub max_meta_per_node: i64,
    pub min_meta_per_service: i64,
    pub max_meta_per_service: i64,

    pub node_type: String,
    pub service_type: String,
    pub address_type: String,
    pub meta_key_type: String,
    pub meta_value_type: String,

    pub node_pet_names: PetNameUserConfig,
    pub service_pet_names: PetNameUserConfig,
    pub meta_key_pet_names: PetNameUserConfig,
    pub meta_value_random_b64: RandomB64UserConfig,
}

impl Default for CatalogUserConfig {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES as i64,
            min_services_per_node: DEFAULT_MIN_SERVICES_PER_NODE as i64,
            max_services_per_node: DEFAULT_MAX_SERVICES_PER_NODE as i64,
            min_instances_per_service: DEFAULT_MIN_INSTANCES_PER_SERVICE as i64,
            max_instances_per_service: DEFAULT_MAX_INSTANCES_PER_SERVICE as i64,
            min_meta_per_node: DEFAULT_MIN_META_PER_NODE as i64,
            max_meta_per_node: DEFAULT_MAX_META_PER_NODE as i64,
            min_meta_per_service: DEFAULT_MIN_META_PER_SERVICE as i64,
            max_meta_per_service: DEFAULT_MAX_META_PER_SERVICE as i64,
            node_type: NameKind::default().as_str().to_string(),
            service_type: NameKind::default().as_str().to_string(),
            address_type: AddressKind::default().as_str().to_string(),
            meta_key_type: NameKind::default().as_str().to_string(),
            meta_value_type: PayloadKind::default().as_str().to_string(),
            node_pet_names: PetNameUserConfig::default(),
            service_pet_names: PetNameUserConfig::default(),
            meta_key_pet_names: PetNameUserConfig::default(),
            meta_value_random_b64: RandomB64UserConfig::default(),
        }
    }
}

impl CatalogUserConfig {
    /// The section used when a config file leaves it out: default ranges and
    /// generators, no nodes.
    pub fn absent() -> Self {
        Self {
            num_nodes: 0,
            ..Self::default()
        }
    }

    pub fn resolve(&self) -> Result<CatalogGeneratorConfig, ConfigError> {
        let num_nodes = if self.num_nodes < 0 {
            DEFAULT_NUM_NODES
        } else {
            usize::try_from(self.num_nodes).unwrap_or(DEFAULT_NUM_NODES)
        };

        let node_name = match NameKind::parse("Catalog.NodeType", &self.node_type)? {
            NameKind::PetName => StringGenerator::PetName(self.node_pet_names.resolve()),
        };
        let service_name = match NameKind::parse("Catalog.ServiceType", &self.service_type)? {
            NameKind::PetName => StringGenerator::PetName(self.service_pet_names.resolve()),
        };
        let meta_key = match NameKind::parse("Catalog.MetaKeyType", &self.meta_key_type)? {
            NameKind::PetName => StringGenerator::PetName(self.meta_key_pet_names.resolve()),
        };
        let meta_value = match PayloadKind::parse("Catalog.MetaValueType", &self.meta_value_type)?
        {
            PayloadKind::RandomB64 => {
                StringGenerator::RandomB64(self.meta_value_random_b64.resolve())
            }
        };
        let address = AddressKind::parse("Catalog.AddressType", &self.address_type)?.resolve();

        Ok(CatalogGeneratorConfig {
            num_nodes,
            services_per_node: CountRange::from_user(
                self.min_services_per_node,
                self.max_services_per_node,
                DEFAULT_MIN_SERVICES_PER_NODE,
                DEFAULT_MAX_SERVICES_PER_NODE,
            ),
            instances_per_service: CountRange::from_user(
                self.min_instances_per_service,
                self.max_instances_per_service,
                DEFAULT_MIN_INSTANCES_PER_SERVICE,
                DEFAULT_MAX_INSTANCES_PER_SERVICE,
            ),
            meta_per_node: CountRange::from_user(
                self.min_meta_per_node,
                self.max_meta_per_node,
                DEFAULT_MIN_META_PER_NODE,
                DEFAULT_MAX_META_PER_NODE,
            ),
            meta_per_instance: CountRange::from_user(
                self.min_meta_per_service,
                self.max_meta_per_service,
                DEFAULT_MIN_META_PER_SERVICE,
                DEFAULT_MAX_META_PER_SERVICE,
            ),
            node_name,
            service_name,
            meta_key,
            meta_value,
            address,
        })
    }
}

/// Resolved catalog generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogGeneratorConfig {
    pub num_nodes: usize,
    pub services_per_node: CountRange,
    pub instances_per_service: CountRange,
    pub meta_per_node: CountRange,
    pub meta_per_instance: CountRange,
    pub node_name: StringGenerator,
    pub service_name: StringGenerator,
    pub meta_key: StringGenerator,
    pub meta_value: StringGenerator,
    pub address: AddressGenerator,
}

impl CatalogGeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.node_name.validate("Catalog.NodePetNames")?;
        self.service_name.validate("Catalog.ServicePetNames")?;
        self.meta_key.validate("Catalog.MetaKeyPetNames")?;
        self.meta_value.validate("Catalog.MetaValueRandomB64")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse() -> CatalogUserConfig {
        CatalogUserConfig {
            num_nodes: -1,
            min_services_per_node: 0,
            max_services_per_node: 0,
            min_instances_per_service: 0,
            max_instances_per_service: 0,
            min_meta_per_node: 0,
            max_meta_per_node: 0,
            min_meta_per_service: 0,
            max_meta_per_service: 0,
            node_type: String::new(),
            service_type: String::new(),
            address_type: String::new(),
            meta_key_type: String::new(),
            meta_value_type: String::new(),
            node_pet_names: PetNameUserConfig::default(),
            service_pet_names: PetNameUserConfig::default(),
            meta_key_pet_names: PetNameUserConfig::default(),
            meta_value_random_b64: RandomB64UserConfig::default(),
        }
    }

    #[test]
    fn test_sparse_config_matches_defaults() {
        let sparse = sparse().resolve().unwrap();
        let defaults = CatalogUserConfig::default().resolve().unwrap();
        assert_eq!(sparse, defaults);
    }

    #[test]
    fn test_non_positive_counts_take_defaults() {
        let resolved = CatalogUserConfig {
            num_nodes: -5,
            min_services_per_node: -1,
            max_services_per_node: 0,
            min_instances_per_service: -3,
            ..sparse()
        }
        .resolve()
        .unwrap();

        assert_eq!(resolved.num_nodes, DEFAULT_NUM_NODES);
        assert_eq!(resolved.services_per_node, CountRange::new(8, 32));
        assert_eq!(resolved.instances_per_service, CountRange::new(1, 1));
    }

    #[test]
    fn test_zero_nodes_is_honored() {
        let resolved = CatalogUserConfig {
            num_nodes: 0,
            ..sparse()
        }
        .resolve()
        .unwrap();
        assert_eq!(resolved.num_nodes, 0);
    }

    #[test]
    fn test_missing_num_nodes_means_none() {
        let parsed: CatalogUserConfig =
            serde_json::from_str(r#"{ "MinServicesPerNode": 2 }"#).unwrap();
        assert_eq!(parsed.resolve().unwrap().num_nodes, 0);
        assert_eq!(CatalogUserConfig::absent().resolve().unwrap().num_nodes, 0);
    }

    #[test]
    fn test_max_below_min_is_clamped() {
        let resolved = CatalogUserConfig {
            min_services_per_node: 40,
            max_services_per_node: 10,
            min_meta_per_node: 6,
            max_meta_per_node: 2,
            min_meta_per_service: 9,
            max_meta_per_service: 0,
            ..sparse()
        }
        .resolve()
        .unwrap();

        assert_eq!(resolved.services_per_node, CountRange::exactly(40));
        assert_eq!(resolved.meta_per_node, CountRange::exactly(6));
        // max defaults to 8 first, then is raised to the configured min
        assert_eq!(resolved.meta_per_instance, CountRange::exactly(9));
    }

    #[test]
    fn test_unknown_selectors_name_their_field() {
        let cases: [(fn(&mut CatalogUserConfig), &str); 5] = [
            (|c| c.node_type = "x".to_string(), "Catalog.NodeType"),
            (|c| c.service_type = "x".to_string(), "Catalog.ServiceType"),
            (|c| c.meta_key_type = "x".to_string(), "Catalog.MetaKeyType"),
            (|c| c.meta_value_type = "x".to_string(), "Catalog.MetaValueType"),
            (|c| c.address_type = "x".to_string(), "Catalog.AddressType"),
        ];

        for (mutate, expected_field) in cases {
            let mut config = sparse();
            mutate(&mut config);
            match config.resolve() {
                Err(ConfigError::InvalidKind { field, value }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(value, "x");
                }
                other => panic!("Expected InvalidKind for {expected_field}, got {other:?}"),
            }
        }
    }
}
