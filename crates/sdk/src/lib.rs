//! # Promq SDK
//!
//! Prometheus query client for OpenFaaS clusters. Turns monitoring questions
//! such as "average execution time of each function over the last five
//! minutes" into PromQL, runs them against `/api/v1/query`, and returns
//! per-function or per-node maps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promq_sdk::{PromqClient, PromqResult};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> PromqResult<()> {
//!     let client = PromqClient::builder()
//!         .host("localhost")
//!         .port(9090)
//!         .build()?;
//!
//!     let window = Duration::from_secs(5 * 60);
//!
//!     for (function, seconds) in client.gateway().average_execution_time(window).await? {
//!         // NaN means the series exists but its sample could not be parsed
//!         println!("{function}: {seconds}s");
//!     }
//!
//!     let cpu = client.nodes().cpu_usage(window).await?;
//!     println!("{} nodes reporting", cpu.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{PromqClient, PromqClientBuilder};
pub use config::{ClientConfig, DEFAULT_PORT};
pub use error::{PromqError, PromqResult};

// Re-export core types for convenience
pub use promq_core::{
    DecodeError, FunctionValues, InstanceValues, InvocationRates, MetricFamily, Normalized,
    ResponseShape, ServiceCounts, TimeWindow,
};
