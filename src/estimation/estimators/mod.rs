mod estimator;
mod rtt_estimator;

pub use estimator::Estimator;
pub use rtt_estimator::{DEV_MULTIPLIER, RttEstimator};
