pub mod spy_estimator;

pub use spy_estimator::{SpyEstimator, SpyHandle};
