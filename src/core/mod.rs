pub mod error;
pub mod samples;

pub use error::RttError;
pub use samples::{ProbeOutcome, Sample};
