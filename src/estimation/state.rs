use serde::{Deserialize, Serialize};

/// Output of one estimator step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RttEstimate {
    pub estimated_rtt: f64,
    pub dev_rtt: f64,
    pub timeout_interval: f64,
}

/// Lifecycle of an estimator: it moves from `Uninitialized` to `Tracking`
/// on the first accepted sample and only goes back through a reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EstimatorState {
    #[default]
    Uninitialized,
    Tracking(RttEstimate),
}

impl EstimatorState {
    #[inline]
    pub fn is_tracking(&self) -> bool {
        matches!(self, EstimatorState::Tracking(_))
    }
}
