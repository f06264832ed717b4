//! Configuration types for the Promq SDK.

use std::time::Duration;

/// Default Prometheus HTTP port.
pub const DEFAULT_PORT: u16 = 9090;

/// Connection parameters for a Prometheus-compatible backend.
///
/// Values are not validated here; a malformed host only surfaces when a
/// query is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Hostname or IP address of the Prometheus server.
    pub host: String,
    /// Port of the Prometheus HTTP API.
    pub port: u16,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: None,
        }
    }

    /// The instant-query endpoint, e.g. `http://localhost:9090/api/v1/query`.
    pub fn query_url(&self) -> String {
        format!("http://{}:{}/api/v1/query", self.host, self.port)
    }
}
