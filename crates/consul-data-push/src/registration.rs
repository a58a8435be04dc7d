//! Request bodies for Consul's `/v1/catalog/register` endpoint.

use consul_data_core::{Node, ServiceInstance};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog registration, registering either a node or one service
/// instance on an already registered node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogRegistration {
    #[serde(rename = "ID", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub node: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub datacenter: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_meta: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<AgentService>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip_node_update: bool,
}

/// The service part of a registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgentService {
    #[serde(rename = "ID")]
    pub id: String,

    pub service: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,

    pub port: u16,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl CatalogRegistration {
    /// Registration for the node itself. The node's own datacenter wins over
    /// `default_datacenter`.
    pub fn node(node: &Node, default_datacenter: &str) -> Self {
        Self {
            id: node.id.clone(),
            node: node.name.clone(),
            address: node.address.clone(),
            datacenter: pick(&node.datacenter, default_datacenter),
            node_meta: node.meta.clone(),
            service: None,
            skip_node_update: false,
        }
    }

    /// Registration for one service instance that leaves the node untouched.
    pub fn instance(node: &Node, instance: &ServiceInstance, default_datacenter: &str) -> Self {
        Self {
            id: node.id.clone(),
            node: node.name.clone(),
            address: node.address.clone(),
            datacenter: pick(&node.datacenter, default_datacenter),
            node_meta: BTreeMap::new(),
            service: Some(AgentService {
                id: instance.id.clone(),
                service: instance.name.clone(),
                address: instance.address.clone(),
                port: instance.port,
                meta: instance.meta.clone(),
            }),
            skip_node_update: true,
        }
    }
}

fn pick(own: &str, fallback: &str) -> String {
    if own.is_empty() { fallback } else { own }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node() -> Node {
        Node {
            datacenter: String::new(),
            address: "198.18.0.1".to_string(),
            id: "8f2d5c1e-0000-4000-8000-000000000001".to_string(),
            name: "eagerly-brave-otter".to_string(),
            meta: BTreeMap::from([("zone".to_string(), "YQ==".to_string())]),
            services: vec![],
        }
    }

    #[test]
    fn test_node_registration_body() {
        let body = serde_json::to_value(CatalogRegistration::node(&node(), "")).unwrap();
        assert_eq!(
            body,
            json!({
                "ID": "8f2d5c1e-0000-4000-8000-000000000001",
                "Node": "eagerly-brave-otter",
                "Address": "198.18.0.1",
                "NodeMeta": { "zone": "YQ==" }
            })
        );
    }

    #[test]
    fn test_instance_registration_body() {
        let instance = ServiceInstance {
            name: "web".to_string(),
            address: "198.19.3.4".to_string(),
            id: "web-1".to_string(),
            port: 8080,
            meta: BTreeMap::new(),
        };

        let body =
            serde_json::to_value(CatalogRegistration::instance(&node(), &instance, "dc2")).unwrap();
        assert_eq!(
            body,
            json!({
                "ID": "8f2d5c1e-0000-4000-8000-000000000001",
                "Node": "eagerly-brave-otter",
                "Address": "198.18.0.1",
                "Datacenter": "dc2",
                "SkipNodeUpdate": true,
                "Service": {
                    "ID": "web-1",
                    "Service": "web",
                    "Address": "198.19.3.4",
                    "Port": 8080
                }
            })
        );
    }

    #[test]
    fn test_node_datacenter_overrides_default() {
        let mut node = node();
        node.datacenter = "east".to_string();
        assert_eq!(CatalogRegistration::node(&node, "west").datacenter, "east");
    }
}
