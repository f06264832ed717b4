//! Main client for the Promq SDK.

use crate::api::{GatewayApi, NodesApi};
use crate::config::{ClientConfig, DEFAULT_PORT};
use crate::error::{PromqError, PromqResult};
use crate::transport::HttpTransport;
use bytes::Bytes;
use promq_core::{MetricFamily, Normalized};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Client for querying a Prometheus instance that scrapes an OpenFaaS cluster.
///
/// Holds only immutable connection parameters, so it is cheap to clone and
/// safe to share between tasks.
#[derive(Debug, Clone)]
pub struct PromqClient {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl PromqClient {
    /// Create a new client builder.
    pub fn builder() -> PromqClientBuilder {
        PromqClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> PromqResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Connection parameters this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the OpenFaaS gateway metrics API.
    pub fn gateway(&self) -> GatewayApi<'_> {
        GatewayApi::new(self)
    }

    /// Get the node-exporter metrics API.
    pub fn nodes(&self) -> NodesApi<'_> {
        NodesApi::new(self)
    }

    /// Execute an arbitrary instant query and return the raw body.
    pub async fn query(&self, expression: &str) -> PromqResult<Bytes> {
        self.http.query(expression).await
    }

    /// Query any metric family and decode it under the matching shape.
    pub async fn fetch(&self, family: MetricFamily) -> PromqResult<Normalized> {
        let body = self.execute(family).await?;
        Ok(family.shape().normalize(&body)?)
    }

    /// Render and run one family's query, returning the undecoded body.
    pub(crate) async fn execute(&self, family: MetricFamily) -> PromqResult<Bytes> {
        debug!(family = family.name(), "Fetching metric family");
        self.http.query(&family.expression()).await
    }
}

/// Builder for creating a PromqClient.
pub struct PromqClientBuilder {
    host: Option<String>,
    port: u16,
    timeout: Option<Duration>,
}

impl PromqClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            timeout: None,
        }
    }

    /// Set the Prometheus host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the Prometheus port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> PromqResult<PromqClient> {
        let host = self
            .host
            .ok_or_else(|| PromqError::Config("host is required".to_string()))?;

        let config = ClientConfig {
            host,
            port: self.port,
            timeout: self.timeout,
        };

        PromqClient::from_config(config)
    }
}

impl Default for PromqClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
