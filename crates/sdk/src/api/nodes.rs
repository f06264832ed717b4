//! Node-exporter metrics.

use crate::client::PromqClient;
use crate::error::PromqResult;
use promq_core::response::decode_node_usage;
use promq_core::{InstanceValues, MetricFamily, TimeWindow};

/// Nodes API for per-instance resource usage.
pub struct NodesApi<'a> {
    client: &'a PromqClient,
}

impl<'a> NodesApi<'a> {
    pub(crate) fn new(client: &'a PromqClient) -> Self {
        Self { client }
    }

    /// Busy CPU fraction (0..1) averaged over `window`, keyed by instance.
    pub async fn cpu_usage(&self, window: impl Into<TimeWindow>) -> PromqResult<InstanceValues> {
        self.usage(MetricFamily::CpuUsage(window.into())).await
    }

    /// Used memory fraction (0..1) averaged over `window`, keyed by instance.
    pub async fn ram_usage(&self, window: impl Into<TimeWindow>) -> PromqResult<InstanceValues> {
        self.usage(MetricFamily::RamUsage(window.into())).await
    }

    async fn usage(&self, family: MetricFamily) -> PromqResult<InstanceValues> {
        let body = self.client.execute(family).await?;
        Ok(decode_node_usage(&body)?)
    }
}
