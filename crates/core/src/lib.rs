// Query construction and response normalization for Prometheus-backed FaaS metrics

pub mod error;
pub mod query;
pub mod response;
pub mod window;

pub use error::{DecodeError, DecodeResult};
pub use query::MetricFamily;
pub use response::{
    FunctionValues, InstanceValues, InvocationRates, Normalized, ResponseShape, ServiceCounts,
};
pub use window::TimeWindow;
