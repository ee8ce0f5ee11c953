use crate::core::ProbeOutcome;
use std::io::Error;

/// Pull-based producer of probe outcomes.
///
/// A source hides how a latency was measured (ICMP echo, TCP handshake,
/// replayed capture...). It yields one [`ProbeOutcome`] per attempt, in the
/// order the replies arrived; any waiting on the network happens inside
/// [`next_attempt`](Self::next_attempt).
pub trait SampleSource {
    /// Indicates whether the source *may* produce more attempts.
    ///
    /// If it returns `false`, a subsequent call to `next_attempt` must
    /// return `None`.
    fn has_more_attempts(&self) -> bool;

    /// Produces the outcome of the next attempt, or `None` once exhausted.
    fn next_attempt(&mut self) -> Option<ProbeOutcome>;

    /// Resets the source to its initial state.
    fn restart(&mut self) -> Result<(), Error>;
}
