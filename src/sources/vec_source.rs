use crate::core::ProbeOutcome;
use crate::sources::SampleSource;
use std::io::Error;

/// Replays a fixed list of outcomes.
#[derive(Debug, Clone)]
pub struct VecSource {
    outcomes: Vec<ProbeOutcome>,
    idx: usize,
}

impl VecSource {
    pub fn new(outcomes: Vec<ProbeOutcome>) -> Self {
        Self { outcomes, idx: 0 }
    }

    /// Every value is a reply.
    pub fn from_replies<I: IntoIterator<Item = f64>>(replies: I) -> Self {
        Self::new(replies.into_iter().map(ProbeOutcome::Reply).collect())
    }

    /// `None` entries are lost attempts.
    pub fn from_options<I: IntoIterator<Item = Option<f64>>>(values: I) -> Self {
        Self::new(values.into_iter().map(ProbeOutcome::from).collect())
    }
}

impl SampleSource for VecSource {
    fn has_more_attempts(&self) -> bool {
        self.idx < self.outcomes.len()
    }

    fn next_attempt(&mut self) -> Option<ProbeOutcome> {
        let out = self.outcomes.get(self.idx).copied()?;
        self.idx += 1;
        Some(out)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
