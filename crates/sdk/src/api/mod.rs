//! Query APIs grouped by exporter.

pub mod gateway;
pub mod nodes;

pub use gateway::GatewayApi;
pub use nodes::NodesApi;
