use crate::core::RttError;
use crate::estimation::{EstimatorState, RttEstimate};

/// Sequential round-trip time estimator.
///
/// Implementations consume one latency sample at a time via [`update`] and
/// expose the smoothed triple produced by the latest accepted sample.
/// Calls must arrive in sample-arrival order; the recurrence is not
/// commutative.
pub trait Estimator {
    /// Incorporates a new sample (milliseconds).
    ///
    /// A non-finite or negative sample fails with [`RttError::InvalidSample`]
    /// and leaves the internal state exactly as it was.
    fn update(&mut self, sample_ms: f64) -> Result<RttEstimate, RttError>;

    /// Drops all smoothing history and returns to the uninitialized state.
    fn reset(&mut self);

    /// Current state of the recurrence.
    fn state(&self) -> EstimatorState;

    /// Returns the current estimate, if at least one sample was accepted.
    fn current(&self) -> Option<RttEstimate> {
        match self.state() {
            EstimatorState::Uninitialized => None,
            EstimatorState::Tracking(e) => Some(e),
        }
    }
}
