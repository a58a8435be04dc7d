//! Bookkeeping for one catalog generation run.

use std::collections::{HashMap, HashSet};

/// Tracks what a catalog run has handed out so far.
///
/// Lives only as long as one call to [`crate::catalog::generate`].
#[derive(Debug, Default)]
pub struct GenerationState {
    /// node name -> service name -> instances of that service already on the node
    instances: HashMap<String, HashMap<String, usize>>,
    node_ids: HashSet<String>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_name_taken(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    pub fn node_id_taken(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    /// Record a node's name and ID so later nodes cannot reuse them.
    pub fn register_node(&mut self, name: &str, id: &str) {
        self.instances.insert(name.to_string(), HashMap::new());
        self.node_ids.insert(id.to_string());
    }

    /// ID for the next instance of `service` on `node`: the bare service name
    /// the first time, then `<service>-1`, `<service>-2`, ...
    pub fn next_instance_id(&mut self, node: &str, service: &str) -> String {
        let seen = self
            .instances
            .entry(node.to_string())
            .or_default()
            .entry(service.to_string())
            .or_insert(0);

        let id = if *seen == 0 {
            service.to_string()
        } else {
            format!("{service}-{seen}")
        };
        *seen += 1;
        id
    }

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }
}
