//! Prometheus instant-query envelopes and their projection into per-entity maps.
//!
//! Every family answers with the same `{"data": {"result": [...]}}` vector
//! envelope, but the label set on each sample differs: gateway metrics are
//! keyed by `function_name` (plus `code` for invocations), node-exporter
//! metrics by `instance`. Each shape gets its own label type so a response
//! missing the expected label fails to decode instead of producing empty keys.

use crate::error::DecodeResult;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Function name to value (execution time in seconds).
pub type FunctionValues = HashMap<String, f64>;

/// Function name to status code to invocations per second.
pub type InvocationRates = HashMap<String, HashMap<String, f64>>;

/// Function name to active replica count.
pub type ServiceCounts = HashMap<String, i64>;

/// Node-exporter instance address to usage fraction.
pub type InstanceValues = HashMap<String, f64>;

/// Top-level body of `/api/v1/query`.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<L> {
    pub status: Option<String>,
    pub data: QueryData<L>,
}

#[derive(Debug, Deserialize)]
pub struct QueryData<L> {
    #[serde(rename = "resultType")]
    pub result_type: Option<String>,
    pub result: Vec<VectorSample<L>>,
}

/// One series of an instant vector: its labels and `[timestamp, "value"]`.
#[derive(Debug, Deserialize)]
pub struct VectorSample<L> {
    pub metric: L,
    pub value: (IgnoredAny, String),
}

impl<L> VectorSample<L> {
    pub fn raw_value(&self) -> &str {
        &self.value.1
    }
}

#[derive(Debug, Deserialize)]
pub struct FunctionLabels {
    pub function_name: String,
}

#[derive(Debug, Deserialize)]
pub struct InvocationLabels {
    pub function_name: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct InstanceLabels {
    pub instance: String,
}

/// The closed set of response envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    ExecutionTime,
    InvocationRate,
    ServiceCount,
    NodeUsage,
}

impl ResponseShape {
    /// Decode `body` under this shape.
    pub fn normalize(&self, body: &[u8]) -> DecodeResult<Normalized> {
        Ok(match self {
            Self::ExecutionTime => Normalized::ExecutionTimes(decode_execution_times(body)?),
            Self::InvocationRate => Normalized::InvocationRates(decode_invocation_rates(body)?),
            Self::ServiceCount => Normalized::ServiceCounts(decode_service_counts(body)?),
            Self::NodeUsage => Normalized::NodeUsage(decode_node_usage(body)?),
        })
    }
}

/// A decoded result for any metric family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    ExecutionTimes(FunctionValues),
    InvocationRates(InvocationRates),
    ServiceCounts(ServiceCounts),
    NodeUsage(InstanceValues),
}

impl Normalized {
    /// Number of distinct entities (functions or instances) in the result.
    pub fn len(&self) -> usize {
        match self {
            Self::ExecutionTimes(m) => m.len(),
            Self::InvocationRates(m) => m.len(),
            Self::ServiceCounts(m) => m.len(),
            Self::NodeUsage(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unparsable samples become NaN so one bad series does not discard the rest.
///
/// Finite-looking input that overflows (`1e400`) counts as unparsable; only a
/// literal `Inf`/`NaN` sample may yield a non-finite value.
fn parse_float(key: &str, raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() || is_special_literal(raw) => value,
        _ => {
            warn!(key = %key, value = %raw, "Unparsable sample value, using NaN");
            f64::NAN
        }
    }
}

fn is_special_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}

fn parse_int(key: &str, raw: &str) -> i64 {
    raw.parse::<i64>().unwrap_or_else(|_| {
        warn!(key = %key, value = %raw, "Unparsable sample count, using 0");
        0
    })
}

pub fn decode_execution_times(body: &[u8]) -> DecodeResult<FunctionValues> {
    let response: QueryResponse<FunctionLabels> = serde_json::from_slice(body)?;

    Ok(response
        .data
        .result
        .into_iter()
        .map(|sample| {
            let value = parse_float(&sample.metric.function_name, sample.raw_value());
            (sample.metric.function_name, value)
        })
        .collect())
}

pub fn decode_invocation_rates(body: &[u8]) -> DecodeResult<InvocationRates> {
    let response: QueryResponse<InvocationLabels> = serde_json::from_slice(body)?;

    let mut rates = InvocationRates::new();
    for sample in response.data.result {
        let value = parse_float(&sample.metric.function_name, sample.raw_value());
        rates
            .entry(sample.metric.function_name)
            .or_default()
            .insert(sample.metric.code, value);
    }

    Ok(rates)
}

pub fn decode_service_counts(body: &[u8]) -> DecodeResult<ServiceCounts> {
    let response: QueryResponse<FunctionLabels> = serde_json::from_slice(body)?;

    Ok(response
        .data
        .result
        .into_iter()
        .map(|sample| {
            let count = parse_int(&sample.metric.function_name, sample.raw_value());
            (sample.metric.function_name, count)
        })
        .collect())
}

/// Shared by CPU and RAM usage, both keyed by node-exporter instance.
pub fn decode_node_usage(body: &[u8]) -> DecodeResult<InstanceValues> {
    let response: QueryResponse<InstanceLabels> = serde_json::from_slice(body)?;

    Ok(response
        .data
        .result
        .into_iter()
        .map(|sample| {
            let value = parse_float(&sample.metric.instance, sample.raw_value());
            (sample.metric.instance, value)
        })
        .collect())
}
