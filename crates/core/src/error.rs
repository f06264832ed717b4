use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// A response body that could not be projected into a normalized map.
///
/// Raised when the body is not JSON, or when it is JSON but does not carry the
/// envelope and label set expected for the queried metric family.
#[derive(Debug, Error)]
#[error("failed to decode Prometheus response: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

impl DecodeError {
    /// The underlying parse failure.
    pub fn inner(&self) -> &serde_json::Error {
        &self.source
    }

    /// Whether the body was not valid JSON at all, as opposed to JSON of the wrong shape.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self.source.classify(),
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof
        )
    }
}
