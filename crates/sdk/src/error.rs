//! Error types for the Promq SDK.

use promq_core::DecodeError;

/// Result type for SDK operations.
pub type PromqResult<T> = Result<T, PromqError>;

/// Error types that can occur when querying Prometheus.
///
/// Every variant is fatal to the call that raised it. Unparsable sample
/// values are not errors; they surface as NaN (or zero for counts) inside an
/// otherwise successful result.
#[derive(Debug, thiserror::Error)]
pub enum PromqError {
    /// The query endpoint URL could not be formed from host and port.
    #[error("Invalid Prometheus endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("Error while building the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request to the Prometheus API could not be completed.
    #[error("Error while performing an HTTP request to the Prometheus API endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be fully read.
    #[error("Error while reading the content of an HTTP response from the Prometheus API endpoint: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The response body did not match the expected envelope.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PromqError {
    /// Whether the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether a response was received but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether the request could not even be constructed.
    pub fn is_request_construction(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::Client(_) | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_classification() {
        let err: PromqError = promq_core::response::decode_execution_times(b"")
            .unwrap_err()
            .into();

        assert!(err.is_decode());
        assert!(!err.is_transport());
        assert!(!err.is_request_construction());
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn test_invalid_url_classification() {
        let err: PromqError = url::Url::parse("http://exa mple:80/").unwrap_err().into();

        assert!(err.is_request_construction());
        assert!(err.to_string().starts_with("Invalid Prometheus endpoint"));
    }
}
