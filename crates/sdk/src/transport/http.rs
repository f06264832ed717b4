//! HTTP transport layer for the Promq SDK.

use crate::config::ClientConfig;
use crate::error::{PromqError, PromqResult};
use bytes::Bytes;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// HTTP transport for issuing instant queries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> PromqResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(PromqError::Client)?;

        Ok(Self { client, config })
    }

    /// Build the instant-query endpoint URL.
    fn endpoint(&self) -> PromqResult<Url> {
        Ok(Url::parse(&self.config.query_url())?)
    }

    /// Execute an instant query and return the raw response body.
    ///
    /// The HTTP status is not inspected: an error page comes back as-is and
    /// fails later when it is decoded.
    pub async fn query(&self, expression: &str) -> PromqResult<Bytes> {
        let url = self.endpoint()?;
        debug!(url = %url, query = %expression, "GET request");

        let response = self
            .client
            .get(url)
            .query(&[("query", expression)])
            .send()
            .await
            .map_err(PromqError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(PromqError::BodyRead)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Query response");

        Ok(body)
    }
}
