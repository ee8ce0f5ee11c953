mod config;
mod estimators;
mod state;

pub use config::{DEFAULT_ALPHA, DEFAULT_BETA, EstimatorConfig};
pub use estimators::{DEV_MULTIPLIER, Estimator, RttEstimator};
pub use state::{EstimatorState, RttEstimate};
