//! Consul pusher.
//!
//! Registers a generated artifact against a Consul agent through its HTTP
//! API: every KV entry first, then every node followed by its service
//! instances.

use crate::error::PushError;
use crate::registration::CatalogRegistration;
use consul_data_core::{Catalog, Data, Kv, KvValue, Node};
use futures::stream::{self, TryStreamExt};
use reqwest::{Client, RequestBuilder, Url};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Address used when none is configured.
pub const DEFAULT_HTTP_ADDR: &str = "http://127.0.0.1:8500";

/// Header carrying the ACL token.
pub const TOKEN_HEADER: &str = "X-Consul-Token";

/// Connection and scheduling options for a push.
#[derive(Debug, Clone)]
pub struct PushOptions {
    /// Consul HTTP address; `host:port` without a scheme means plain HTTP
    pub http_addr: String,
    /// ACL token sent with every request unless an entry carries its own
    pub token: Option<String>,
    /// Datacenter for resources that don't name one
    pub datacenter: Option<String>,
    /// Maximum number of requests in flight
    pub parallel: usize,
    /// Suppress per-resource log lines
    pub quiet: bool,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            token: None,
            datacenter: None,
            parallel: 1,
            quiet: false,
        }
    }
}

/// Metrics from a push operation.
#[derive(Debug, Clone, Default)]
pub struct PushMetrics {
    /// Number of KV entries written.
    pub kv_entries: u64,
    /// Number of nodes registered.
    pub nodes: u64,
    /// Number of service instances registered.
    pub service_instances: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl PushMetrics {
    /// Total number of resources created.
    pub fn resources(&self) -> u64 {
        self.kv_entries + self.nodes + self.service_instances
    }

    /// Calculate resources per second.
    pub fn resources_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.resources() as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Pushes KV entries and catalog registrations to Consul.
///
/// # Example
///
/// ```ignore
/// let pusher = ConsulPusher::new(PushOptions {
///     http_addr: "http://127.0.0.1:8500".to_string(),
///     parallel: 8,
///     ..PushOptions::default()
/// })?;
/// let metrics = pusher.push(&data).await?;
/// println!("{} resources created", metrics.resources());
/// ```
pub struct ConsulPusher {
    client: Client,
    base_url: Url,
    options: PushOptions,
}

impl ConsulPusher {
    /// Create a new pusher for the agent at `options.http_addr`.
    pub fn new(options: PushOptions) -> Result<Self, PushError> {
        let base_url = parse_http_addr(&options.http_addr)?;
        let client = Client::builder().build().map_err(PushError::Client)?;

        Ok(Self {
            client,
            base_url,
            options,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Push all of `data`: KV entries first, then the catalog.
    ///
    /// Stops at the first failed request; anything already written stays in
    /// Consul.
    pub async fn push(&self, data: &Data) -> Result<PushMetrics, PushError> {
        let start = Instant::now();

        info!("Pushing KV data to Consul at {}", self.base_url);
        let kv_entries = self.push_kv(&data.kv).await?;
        info!("Finished pushing KV data to Consul");

        info!("Pushing Catalog data to Consul at {}", self.base_url);
        let (nodes, service_instances) = self.push_catalog(&data.catalog).await?;
        info!("Finished pushing Catalog data to Consul");

        let metrics = PushMetrics {
            kv_entries,
            nodes,
            service_instances,
            duration: start.elapsed(),
        };

        info!(
            "Total Resources Created: {} ({:.1} resources/sec)",
            metrics.resources(),
            metrics.resources_per_second()
        );

        Ok(metrics)
    }

    /// Write every KV entry. Entries are independent, so up to
    /// `parallel` requests run at once.
    pub async fn push_kv(&self, kv: &Kv) -> Result<u64, PushError> {
        stream::iter(kv.iter().map(Ok))
            .try_for_each_concurrent(self.concurrency(), |(key, value)| self.put_kv(key, value))
            .await?;

        Ok(kv.len() as u64)
    }

    /// Register every node and its service instances. Nodes run
    /// concurrently; registrations within one node run in order.
    ///
    /// Returns the number of nodes and service instances registered.
    pub async fn push_catalog(&self, catalog: &Catalog) -> Result<(u64, u64), PushError> {
        stream::iter(catalog.iter().map(Ok))
            .try_for_each_concurrent(self.concurrency(), |node| self.register_node(node))
            .await?;

        let instances = catalog
            .iter()
            .flat_map(|node| &node.services)
            .map(|service| service.instances.len() as u64)
            .sum::<u64>();

        Ok((catalog.len() as u64, instances))
    }

    /// Write one KV entry.
    pub async fn put_kv(&self, key: &str, value: &KvValue) -> Result<(), PushError> {
        if !self.options.quiet {
            info!("   Key: {}", key);
        }

        let url = self.endpoint(["v1", "kv"], key.split('/'))?;
        let mut request = self.client.put(url).body(value.value.clone());

        let datacenter = non_empty(&value.datacenter).or(self.options.datacenter.as_deref());
        if let Some(dc) = datacenter {
            request = request.query(&[("dc", dc)]);
        }
        if let Some(ns) = non_empty(&value.namespace) {
            request = request.query(&[("ns", ns)]);
        }
        if value.flags != 0 {
            request = request.query(&[("flags", value.flags)]);
        }

        let request = self.with_token(request, non_empty(&value.token));
        self.send(request, format!("key {key}")).await
    }

    /// Register a node, then each of its service instances in order.
    pub async fn register_node(&self, node: &Node) -> Result<(), PushError> {
        if !self.options.quiet {
            info!("   Node: {}", node.name);
        }

        let datacenter = self.options.datacenter.as_deref().unwrap_or_default();

        self.register(
            &CatalogRegistration::node(node, datacenter),
            format!("node {}", node.name),
        )
        .await?;

        for service in &node.services {
            if !self.options.quiet {
                info!("      Service: {}", service.name);
            }
            for instance in &service.instances {
                self.register(
                    &CatalogRegistration::instance(node, instance, datacenter),
                    format!("service {} ({}) for node {}", service.name, instance.id, node.name),
                )
                .await?;
            }
        }

        Ok(())
    }

    async fn register(
        &self,
        registration: &CatalogRegistration,
        resource: String,
    ) -> Result<(), PushError> {
        let url = self.endpoint(["v1", "catalog", "register"], std::iter::empty())?;
        let request = self.client.put(url).json(registration);
        let request = self.with_token(request, None);
        self.send(request, resource).await
    }

    async fn send(&self, request: RequestBuilder, resource: String) -> Result<(), PushError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(PushError::Request { resource, source }),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Status {
                resource,
                status,
                body: body.trim().to_string(),
            });
        }

        debug!("Pushed {resource}");
        Ok(())
    }

    fn with_token(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.or(self.options.token.as_deref()) {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    fn endpoint<'a>(
        &self,
        prefix: impl IntoIterator<Item = &'a str>,
        rest: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, PushError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PushError::InvalidAddress {
                addr: self.options.http_addr.clone(),
                reason: "cannot be used as a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(prefix)
            .extend(rest);
        Ok(url)
    }

    fn concurrency(&self) -> usize {
        self.options.parallel.max(1)
    }
}

/// Parse a Consul HTTP address, accepting bare `host:port` the way the
/// Consul CLI does.
pub fn parse_http_addr(addr: &str) -> Result<Url, PushError> {
    let with_scheme = if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    };

    let url = Url::parse(&with_scheme).map_err(|e| PushError::InvalidAddress {
        addr: addr.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(PushError::InvalidAddress {
            addr: addr.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
