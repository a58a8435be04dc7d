//! KV section of the configuration.

use crate::config::ConfigError;
use crate::generator_config::{
    NameKind, PayloadKind, PetNameUserConfig, RandomB64UserConfig, StringGenerator,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_ENTRIES: usize = 1024;

/// KV generation options as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KvUserConfig {
    /// Number of entries to generate. Absent from a config file means 0;
    /// negative means 1024.
    #[serde(default)]
    pub num_entries: i64,

    /// Key generator kind (`pet-name`)
    pub key_type: String,

    /// Value generator kind (`random-b64`)
    pub value_type: String,

    /// Options for a `pet-name` key generator
    pub pet_name: PetNameUserConfig,

    /// Options for a `random-b64` value generator
    pub random_b64: RandomB64UserConfig,
}

impl Default for KvUserConfig {
    fn default() -> Self {
        Self {
            num_entries: DEFAULT_NUM_ENTRIES as i64,
            key_type: NameKind::default().as_str().to_string(),
            value_type: PayloadKind::default().as_str().to_string(),
            pet_name: PetNameUserConfig::default(),
            random_b64: RandomB64UserConfig::default(),
        }
    }
}

impl KvUserConfig {
    /// The section used when a config file leaves it out: default generators,
    /// no entries.
    pub fn absent() -> Self {
        Self {
            num_entries: 0,
            ..Self::default()
        }
    }

    pub fn resolve(&self) -> Result<KvGeneratorConfig, ConfigError> {
        let num_entries = if self.num_entries < 0 {
            DEFAULT_NUM_ENTRIES
        } else {
            usize::try_from(self.num_entries).unwrap_or(DEFAULT_NUM_ENTRIES)
        };

        let key = match NameKind::parse("KV.KeyType", &self.key_type)? {
            NameKind::PetName => StringGenerator::PetName(self.pet_name.resolve()),
        };

        let value = match PayloadKind::parse("KV.ValueType", &self.value_type)? {
            PayloadKind::RandomB64 => StringGenerator::RandomB64(self.random_b64.resolve()),
        };

        Ok(KvGeneratorConfig {
            num_entries,
            key,
            value,
        })
    }
}

/// Resolved KV generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvGeneratorConfig {
    pub num_entries: usize,
    pub key: StringGenerator,
    pub value: StringGenerator,
}

impl KvGeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.key.validate("KV.PetName")?;
        self.value.validate("KV.RandomB64")
    }
}
