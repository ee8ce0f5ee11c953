use thiserror::Error;

/// Failures surfaced by the estimation and statistics pipeline.
///
/// Every variant is recoverable: a rejected sample leaves the estimator
/// untouched and the caller may keep feeding the stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RttError {
    #[error("invalid sample: {0} (expected a finite, non-negative latency in ms)")]
    InvalidSample(f64),

    #[error("insufficient data: {needed} point(s) required, {got} available")]
    InsufficientData { needed: usize, got: usize },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RttError {
    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        RttError::Configuration(msg.into())
    }
}
