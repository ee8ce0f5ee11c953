pub mod stubs;

pub use stubs::{SpyEstimator, SpyHandle};
