//! Generator settings.
//!
//! Two layers live here:
//!
//! - **User configs** (`PetNameUserConfig`, `RandomB64UserConfig`) and the kind
//!   selectors (`NameKind`, `PayloadKind`, `AddressKind`) as they appear in a
//!   config file. Every field is optional and may be out of range.
//! - **Resolved generators** (`StringGenerator`, `AddressGenerator`,
//!   `CountRange`) with all defaults applied. These are plain data; the
//!   generation logic that interprets them lives in `consul-data-generator`.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

pub const PET_NAME_DEFAULT_PREFIX: &str = "";
pub const PET_NAME_DEFAULT_SEGMENTS: usize = 3;
pub const PET_NAME_DEFAULT_SEPARATOR: &str = "-";

pub const RANDOM_B64_DEFAULT_MIN_SIZE: usize = 64;
pub const RANDOM_B64_DEFAULT_MAX_SIZE: usize = 1024;

// ============================================================================
// Kind selectors
// ============================================================================

/// Generator kinds usable for names (KV keys, nodes, services, meta keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameKind {
    #[default]
    PetName,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PetName => "pet-name",
        }
    }

    /// Parse a selector; an empty selector means the default kind.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ConfigError> {
        match value {
            "" => Ok(Self::default()),
            "pet-name" => Ok(Self::PetName),
            other => Err(ConfigError::InvalidKind {
                field,
                value: other.to_string(),
            }),
        }
    }
}

/// Generator kinds usable for payloads (KV values, meta values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadKind {
    #[default]
    RandomB64,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RandomB64 => "random-b64",
        }
    }

    /// Parse a selector; an empty selector means the default kind.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ConfigError> {
        match value {
            "" => Ok(Self::default()),
            "random-b64" => Ok(Self::RandomB64),
            other => Err(ConfigError::InvalidKind {
                field,
                value: other.to_string(),
            }),
        }
    }
}

/// Generator kinds usable for addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressKind {
    #[default]
    RandomTesting,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RandomTesting => "random-testing",
        }
    }

    /// Parse a selector; an empty selector means the default kind.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ConfigError> {
        match value {
            "" => Ok(Self::default()),
            "random-testing" => Ok(Self::RandomTesting),
            other => Err(ConfigError::InvalidKind {
                field,
                value: other.to_string(),
            }),
        }
    }

    pub fn resolve(&self) -> AddressGenerator {
        match self {
            Self::RandomTesting => AddressGenerator::RandomTesting,
        }
    }
}

// ============================================================================
// User configs
// ============================================================================

/// Pet-name options as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PetNameUserConfig {
    /// Prepended verbatim to every generated name
    pub prefix: String,

    /// Number of words per name (values below 1 fall back to 3)
    pub segments: i64,

    /// Word separator (empty falls back to "-")
    pub separator: String,
}

impl Default for PetNameUserConfig {
    fn default() -> Self {
        Self {
            prefix: PET_NAME_DEFAULT_PREFIX.to_string(),
            segments: PET_NAME_DEFAULT_SEGMENTS as i64,
            separator: PET_NAME_DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl PetNameUserConfig {
    pub fn resolve(&self) -> PetName {
        let segments = positive_or(self.segments, PET_NAME_DEFAULT_SEGMENTS);
        let separator = if self.separator.is_empty() {
            PET_NAME_DEFAULT_SEPARATOR.to_string()
        } else {
            self.separator.clone()
        };

        PetName {
            prefix: self.prefix.clone(),
            segments,
            separator,
        }
    }
}

/// Random base64 payload options as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RandomB64UserConfig {
    /// Minimum raw payload size in bytes (inclusive)
    pub min_size: i64,

    /// Maximum raw payload size in bytes (exclusive unless equal to min)
    pub max_size: i64,
}

impl Default for RandomB64UserConfig {
    fn default() -> Self {
        Self {
            min_size: RANDOM_B64_DEFAULT_MIN_SIZE as i64,
            max_size: RANDOM_B64_DEFAULT_MAX_SIZE as i64,
        }
    }
}

impl RandomB64UserConfig {
    pub fn resolve(&self) -> RandomB64 {
        let min_size = positive_or(self.min_size, RANDOM_B64_DEFAULT_MIN_SIZE);
        let max_size = positive_or(self.max_size, RANDOM_B64_DEFAULT_MAX_SIZE).max(min_size);

        RandomB64 { min_size, max_size }
    }
}

// ============================================================================
// Resolved generators
// ============================================================================

/// A fully resolved string generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StringGenerator {
    /// Random dictionary words joined by a separator
    PetName(PetName),

    /// Base64 encoding of a random byte blob
    RandomB64(RandomB64),
}

impl StringGenerator {
    /// Check the parameters that cannot be repaired by normalization.
    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        match self {
            Self::PetName(pet_name) => pet_name.validate(field),
            Self::RandomB64(random_b64) => random_b64.validate(field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetName {
    pub prefix: String,
    pub segments: usize,
    pub separator: String,
}

impl PetName {
    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::InvalidSegments { field });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomB64 {
    pub min_size: usize,
    pub max_size: usize,
}

impl RandomB64 {
    /// Create a payload generator, rejecting an empty or inverted size range.
    pub fn new(min_size: usize, max_size: usize) -> Result<Self, ConfigError> {
        let generator = Self { min_size, max_size };
        generator.validate("RandomB64")?;
        Ok(generator)
    }

    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min_size < 1 || self.max_size < self.min_size {
            return Err(ConfigError::InvalidSizeRange {
                field,
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

/// A fully resolved address generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AddressGenerator {
    /// IPv4 addresses inside the 198.18.0.0/15 benchmarking block
    #[default]
    RandomTesting,
}

/// A bounded cardinality: `[min, max)`, or exactly `min` when `min >= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    /// Create a range, clamping `max` up to `min`.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Fixed count.
    pub fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    /// Resolve a user-supplied pair: non-positive values take the defaults,
    /// then `max` is clamped up to `min`.
    pub fn from_user(min: i64, max: i64, default_min: usize, default_max: usize) -> Self {
        Self::new(positive_or(min, default_min), positive_or(max, default_max))
    }

    /// Whether `count` is a value this range can produce.
    pub fn contains(&self, count: usize) -> bool {
        if self.min >= self.max {
            count == self.min
        } else {
            (self.min..self.max).contains(&count)
        }
    }
}

/// `value` as a `usize` when it is positive, otherwise `default`.
pub(crate) fn positive_or(value: i64, default: usize) -> usize {
    if value <= 0 {
        return default;
    }
    usize::try_from(value).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_name_defaults() {
        let resolved = PetNameUserConfig {
            prefix: "svc-".to_string(),
            segments: 0,
            separator: String::new(),
        }
        .resolve();

        assert_eq!(
            resolved,
            PetName {
                prefix: "svc-".to_string(),
                segments: 3,
                separator: "-".to_string(),
            }
        );
    }

    #[test]
    fn test_pet_name_negative_segments() {
        let resolved = PetNameUserConfig {
            segments: -4,
            ..PetNameUserConfig::default()
        }
        .resolve();
        assert_eq!(resolved.segments, 3);
    }

    #[test]
    fn test_random_b64_both_unset() {
        let resolved = RandomB64UserConfig {
            min_size: 0,
            max_size: -1,
        }
        .resolve();
        assert_eq!(
            resolved,
            RandomB64 {
                min_size: 64,
                max_size: 1024
            }
        );
    }

    #[test]
    fn test_random_b64_one_unset() {
        let only_max = RandomB64UserConfig {
            min_size: 0,
            max_size: 100,
        }
        .resolve();
        assert_eq!((only_max.min_size, only_max.max_size), (64, 100));

        let only_min = RandomB64UserConfig {
            min_size: 10,
            max_size: 0,
        }
        .resolve();
        assert_eq!((only_min.min_size, only_min.max_size), (10, 1024));
    }

    #[test]
    fn test_random_b64_inverted_is_clamped() {
        let resolved = RandomB64UserConfig {
            min_size: 2000,
            max_size: 10,
        }
        .resolve();
        assert_eq!((resolved.min_size, resolved.max_size), (2000, 2000));
    }

    #[test]
    fn test_random_b64_new_validates() {
        assert!(RandomB64::new(4, 5).is_ok());
        assert!(RandomB64::new(4, 4).is_ok());
        assert!(matches!(
            RandomB64::new(0, 5),
            Err(ConfigError::InvalidSizeRange { min: 0, max: 5, .. })
        ));
        assert!(matches!(
            RandomB64::new(8, 5),
            Err(ConfigError::InvalidSizeRange { min: 8, max: 5, .. })
        ));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(NameKind::parse("KeyType", "").unwrap(), NameKind::PetName);
        assert_eq!(
            NameKind::parse("KeyType", "pet-name").unwrap(),
            NameKind::PetName
        );
        assert_eq!(
            PayloadKind::parse("ValueType", "random-b64").unwrap(),
            PayloadKind::RandomB64
        );
        assert_eq!(
            AddressKind::parse("AddressType", "").unwrap(),
            AddressKind::RandomTesting
        );

        let err = NameKind::parse("KV.KeyType", "uuid").unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::InvalidKind { field: "KV.KeyType", value } if value == "uuid"
        ));
        assert!(err.to_string().contains("KV.KeyType"));
        assert!(err.to_string().contains("uuid"));
    }

    #[test]
    fn test_count_range() {
        let range = CountRange::from_user(8, 4, 1, 1);
        assert_eq!(range, CountRange { min: 8, max: 8 });
        assert!(range.contains(8));
        assert!(!range.contains(7));

        let defaulted = CountRange::from_user(0, -3, 8, 32);
        assert_eq!(defaulted, CountRange { min: 8, max: 32 });
        assert!(defaulted.contains(8));
        assert!(defaulted.contains(31));
        assert!(!defaulted.contains(32));
    }

    #[test]
    fn test_string_generator_serde_tag() {
        let generator = StringGenerator::RandomB64(RandomB64 {
            min_size: 4,
            max_size: 8,
        });
        let json = serde_json::to_value(&generator).unwrap();
        assert_eq!(json["type"], "random-b64");
        assert_eq!(json["min_size"], 4);
    }
}
