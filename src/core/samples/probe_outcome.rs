/// Result of a single probe attempt as reported by a sample source.
///
/// A `Lost` attempt (timeout, unreachable, unparsable reply) contributes no
/// series entry but still counts toward the planned attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeOutcome {
    Reply(f64),
    Lost,
}

impl ProbeOutcome {
    #[inline]
    pub fn rtt_ms(&self) -> Option<f64> {
        match self {
            ProbeOutcome::Reply(v) => Some(*v),
            ProbeOutcome::Lost => None,
        }
    }
}

impl From<Option<f64>> for ProbeOutcome {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => ProbeOutcome::Reply(v),
            None => ProbeOutcome::Lost,
        }
    }
}
