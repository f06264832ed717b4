//! PromQL expressions for the monitored metric families.

use crate::response::ResponseShape;
use crate::window::TimeWindow;

/// One of the monitored quantities, carrying its lookback window where the
/// expression needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    /// Mean function execution time (seconds), per function.
    AverageExecutionTime(TimeWindow),
    /// Per-second invocation rate, per function and status code.
    InvocationRate(TimeWindow),
    /// Currently running replicas, per function.
    ServiceCount,
    /// Busy CPU fraction, per node-exporter instance.
    CpuUsage(TimeWindow),
    /// Used memory fraction, per node-exporter instance.
    RamUsage(TimeWindow),
}

impl MetricFamily {
    /// Render the PromQL expression for this family.
    pub fn expression(&self) -> String {
        match self {
            Self::AverageExecutionTime(window) => format!(
                "rate(gateway_functions_seconds_sum[{w}]) / rate(gateway_functions_seconds_count[{w}])",
                w = window
            ),
            Self::InvocationRate(window) => {
                format!("rate(gateway_function_invocation_total[{}])", window)
            }
            Self::ServiceCount => "gateway_service_count".to_string(),
            Self::CpuUsage(window) => format!(
                "1 - (avg by (instance) (rate(node_cpu_seconds_total{{job=\"node\",mode=\"idle\"}}[{}])))",
                window
            ),
            // Time-averaged free/cached/buffers rather than MemAvailable, so
            // the result is stable across the window instead of a point sample.
            Self::RamUsage(window) => format!(
                "(1 - ((avg_over_time(node_memory_MemFree_bytes[{w}]) + \
                 avg_over_time(node_memory_Cached_bytes[{w}]) + \
                 avg_over_time(node_memory_Buffers_bytes[{w}])) / \
                 avg_over_time(node_memory_MemTotal_bytes[{w}])))",
                w = window
            ),
        }
    }

    /// The response envelope this family's query produces.
    pub fn shape(&self) -> ResponseShape {
        match self {
            Self::AverageExecutionTime(_) => ResponseShape::ExecutionTime,
            Self::InvocationRate(_) => ResponseShape::InvocationRate,
            Self::ServiceCount => ResponseShape::ServiceCount,
            Self::CpuUsage(_) | Self::RamUsage(_) => ResponseShape::NodeUsage,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AverageExecutionTime(_) => "average_execution_time",
            Self::InvocationRate(_) => "invocation_rate",
            Self::ServiceCount => "service_count",
            Self::CpuUsage(_) => "cpu_usage",
            Self::RamUsage(_) => "ram_usage",
        }
    }

    pub fn window(&self) -> Option<TimeWindow> {
        match self {
            Self::AverageExecutionTime(w)
            | Self::InvocationRate(w)
            | Self::CpuUsage(w)
            | Self::RamUsage(w) => Some(*w),
            Self::ServiceCount => None,
        }
    }
}
