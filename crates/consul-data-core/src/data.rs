//! The generated artifact.
//!
//! Field names follow Consul's API casing so the JSON can be read by anything
//! that already understands Consul payloads:
//!
//! ```json
//! {
//!    "KV": {
//!       "<key>": { "Value": "<data>", "Datacenter": "..", "Token": "..", "Namespace": "..", "Flags": 1 }
//!    },
//!    "Catalog": [
//!       {
//!          "Address": "198.18.0.1",
//!          "ID": "<uuid>",
//!          "Name": "<node>",
//!          "Meta": { "..": ".." },
//!          "Services": [
//!             { "Name": "<svc>", "Instances": [ { "Name": "<svc>", "Address": "..", "ID": "<svc>", "Port": 8080 } ] }
//!          ]
//!       }
//!    ]
//! }
//! ```
//!
//! Every optional field is omitted when empty and defaults when absent, so an
//! artifact survives a serialize/deserialize round trip unchanged. All maps are
//! `BTreeMap`s so the serialized form is byte-for-byte reproducible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Indentation used for pretty-printed artifacts.
const ARTIFACT_INDENT: &[u8] = b"   ";

/// Error type for artifact serialization and file I/O.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Error reading or writing an artifact file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error (de)serializing JSON
    #[error("Invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generated KV entries keyed by KV path.
pub type Kv = BTreeMap<String, KvValue>;

/// Generated catalog nodes, in generation order.
pub type Catalog = Vec<Node>;

/// A single KV value record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KvValue {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub datacenter: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// The payload stored under the key
    pub value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub flags: u64,
}

impl KvValue {
    /// Create a value record carrying only a payload.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

/// A catalog node and the services registered on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub datacenter: String,

    pub address: String,

    #[serde(rename = "ID")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,

    #[serde(default)]
    pub services: Vec<Service>,
}

/// A named service on a node with its instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    pub name: String,

    #[serde(default)]
    pub instances: Vec<ServiceInstance>,
}

/// One registered instance of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceInstance {
    pub name: String,

    pub address: String,

    #[serde(rename = "ID")]
    pub id: String,

    pub port: u16,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

/// The full generated artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    #[serde(rename = "KV", default)]
    pub kv: Kv,

    #[serde(rename = "Catalog", default)]
    pub catalog: Catalog,
}

impl Data {
    /// Parse an artifact from JSON.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an artifact previously written by `consul-data generate`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ArtifactError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(ARTIFACT_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the artifact as indented JSON.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let serialized = self.to_json_pretty()?;
        fs::write(path, serialized).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Count the resources in the artifact.
    pub fn summary(&self) -> DataSummary {
        let services = self.catalog.iter().map(|n| n.services.len()).sum();
        let service_instances = self
            .catalog
            .iter()
            .flat_map(|n| &n.services)
            .map(|s| s.instances.len())
            .sum();

        DataSummary {
            keys: self.kv.len(),
            nodes: self.catalog.len(),
            services,
            service_instances,
        }
    }
}

/// Resource counts of an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataSummary {
    pub keys: usize,
    pub nodes: usize,
    pub services: usize,
    pub service_instances: usize,
}

impl fmt::Display for DataSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keys:      {}", self.keys)?;
        writeln!(f, "Nodes:     {}", self.nodes)?;
        writeln!(f, "Services:  {}", self.services)?;
        write!(f, "Instances: {}", self.service_instances)
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
