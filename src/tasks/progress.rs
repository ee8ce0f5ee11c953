use crate::estimation::RttEstimate;
use std::fmt::{Display, Formatter, Result};

/// Point-in-time view of a run, emitted every `progress_frequency` attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub attempts: u64,
    pub successes: u64,
    pub lost: u64,
    pub rejected: u64,
    pub latest: Option<RttEstimate>,
    pub seconds: f64,
}

impl Display for ProgressSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "attempts={}, ok={}, lost={}, rejected={}",
            self.attempts, self.successes, self.lost, self.rejected
        )?;
        if let Some(e) = self.latest {
            write!(
                f,
                ", est={:.3}ms, dev={:.3}ms, timeout={:.3}ms",
                e.estimated_rtt, e.dev_rtt, e.timeout_interval
            )?;
        }
        write!(f, ", t={:.3}s", self.seconds)
    }
}
