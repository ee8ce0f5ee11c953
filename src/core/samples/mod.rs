mod probe_outcome;
mod sample;

pub use probe_outcome::ProbeOutcome;
pub use sample::Sample;
pub(crate) use sample::validate_rtt;
