use anyhow::{Context, Result};
use promq_sdk::{ClientConfig, TimeWindow, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub prometheus: PrometheusConfig,

    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrometheusConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout; unset keeps the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_window_minutes")]
    pub window_minutes: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_window_minutes() -> u64 {
    5
}

impl Default for PrometheusConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_secs: None,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            window_minutes: default_window_minutes(),
        }
    }
}

impl CliConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if !config_path.exists() {
            tracing::debug!("Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(config_path).context("Failed to read configuration file")?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }

    /// Connection parameters for the SDK client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.prometheus.host.clone(),
            port: self.prometheus.port,
            timeout: self.prometheus.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn default_window(&self) -> TimeWindow {
        TimeWindow::from_minutes(self.query.window_minutes)
    }
}
