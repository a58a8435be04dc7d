//! Catalog data generation.
//!
//! Nodes are generated one at a time, each fully (meta, services, instances)
//! before the next, so the RNG call order is fixed for a given configuration:
//!
//! ```text
//! node:     name → id → address → meta → services
//! service:  name → instance count → instances
//! instance: address → id → meta → port
//! ```

use crate::error::{GeneratorError, Stage, StageExt};
use crate::generators::uuid::UuidV4;
use crate::generators::{generate_unique, sample_count, ValueGenerator};
use crate::state::GenerationState;
use consul_data_core::{
    Catalog, CatalogGeneratorConfig, CountRange, Node, Service, ServiceInstance, StringGenerator,
};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Generate the catalog described by `config`.
pub fn generate<R: Rng>(
    config: &CatalogGeneratorConfig,
    rng: &mut R,
) -> Result<Catalog, GeneratorError> {
    CatalogGenerator::new(config, rng).run()
}

/// One catalog generation run: the settings, the RNG and the uniqueness state.
struct CatalogGenerator<'a, R> {
    config: &'a CatalogGeneratorConfig,
    rng: &'a mut R,
    state: GenerationState,
}

impl<'a, R: Rng> CatalogGenerator<'a, R> {
    fn new(config: &'a CatalogGeneratorConfig, rng: &'a mut R) -> Self {
        Self {
            config,
            rng,
            state: GenerationState::new(),
        }
    }

    fn run(mut self) -> Result<Catalog, GeneratorError> {
        let mut nodes = Vec::with_capacity(self.config.num_nodes);
        let mut services = 0usize;
        let mut instances = 0usize;

        for i in 0..self.config.num_nodes {
            let node = self.node().stage(Stage::Node)?;

            services += node.services.len();
            instances += node
                .services
                .iter()
                .map(|s| s.instances.len())
                .sum::<usize>();
            nodes.push(node);

            if (i + 1) % 1_000 == 0 {
                debug!("Generated {} nodes", i + 1);
            }
        }

        info!(
            nodes = self.state.node_count(),
            services,
            instances,
            "Generated catalog"
        );
        Ok(nodes)
    }

    fn node(&mut self) -> Result<Node, GeneratorError> {
        let state = &self.state;
        let name = generate_unique(&self.config.node_name, self.rng, |name| {
            state.node_name_taken(name)
        })
        .stage(Stage::NodeName)?;

        let id = generate_unique(&UuidV4, self.rng, |id| state.node_id_taken(id))
            .stage(Stage::NodeId)?;
        self.state.register_node(&name, &id);

        let address = self
            .config
            .address
            .generate(self.rng)
            .stage(Stage::NodeAddress)?
            .to_string();

        let meta = generate_meta(
            &self.config.meta_per_node,
            &self.config.meta_key,
            &self.config.meta_value,
            self.rng,
        )
        .stage(Stage::NodeMeta)?;

        let num_services = sample_count(&self.config.services_per_node, self.rng);
        let mut services = Vec::with_capacity(num_services);
        for _ in 0..num_services {
            services.push(self.service(&name).stage(Stage::Service)?);
        }

        Ok(Node {
            datacenter: String::new(),
            address,
            id,
            name,
            meta,
            services,
        })
    }

    fn service(&mut self, node: &str) -> Result<Service, GeneratorError> {
        // Service names may repeat on a node; each draw becomes its own record.
        let name = self
            .config
            .service_name
            .generate(self.rng)
            .stage(Stage::ServiceName)?;

        let num_instances = sample_count(&self.config.instances_per_service, self.rng);
        let mut instances = Vec::with_capacity(num_instances);
        for _ in 0..num_instances {
            instances.push(self.instance(node, &name).stage(Stage::Instance)?);
        }

        Ok(Service { name, instances })
    }

    fn instance(&mut self, node: &str, service: &str) -> Result<ServiceInstance, GeneratorError> {
        let address = self
            .config
            .address
            .generate(self.rng)
            .stage(Stage::InstanceAddress)?
            .to_string();

        let id = self.state.next_instance_id(node, service);

        let meta = generate_meta(
            &self.config.meta_per_instance,
            &self.config.meta_key,
            &self.config.meta_value,
            self.rng,
        )
        .stage(Stage::InstanceMeta)?;

        let port = self.rng.random_range(0..u16::MAX);

        Ok(ServiceInstance {
            name: service.to_string(),
            address,
            id,
            port,
            meta,
        })
    }
}

/// Generate a metadata map with a sampled number of entries.
///
/// Each entry draws its value first, then a key not yet in the map.
pub fn generate_meta<R: Rng>(
    count: &CountRange,
    key: &StringGenerator,
    value: &StringGenerator,
    rng: &mut R,
) -> Result<BTreeMap<String, String>, GeneratorError> {
    let num_entries = sample_count(count, rng);
    let mut meta = BTreeMap::new();

    for _ in 0..num_entries {
        let v = value.generate(rng).stage(Stage::MetaValue)?;
        let k = generate_unique(key, rng, |k| meta.contains_key(k)).stage(Stage::MetaKey)?;
        meta.insert(k, v);
    }

    Ok(meta)
}
