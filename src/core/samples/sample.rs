use crate::core::error::RttError;
use serde::{Deserialize, Serialize};

/// One successful latency measurement, tagged with the index of the probe
/// attempt that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub index: u64,
    pub rtt_ms: f64,
}

impl Sample {
    /// Builds a sample, rejecting non-finite or negative latencies.
    #[inline]
    pub fn new(index: u64, rtt_ms: f64) -> Result<Self, RttError> {
        validate_rtt(rtt_ms)?;
        Ok(Self { index, rtt_ms })
    }
}

#[inline]
pub(crate) fn validate_rtt(rtt_ms: f64) -> Result<(), RttError> {
    if rtt_ms.is_finite() && rtt_ms >= 0.0 {
        Ok(())
    } else {
        Err(RttError::InvalidSample(rtt_ms))
    }
}
