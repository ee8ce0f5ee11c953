use crate::core::ProbeOutcome;
use crate::sources::SampleSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{Error, ErrorKind};

/// Seeded generator of latency replies: `base_ms` plus uniform jitter in
/// `[0, jitter_ms)`, with each attempt lost with probability `loss_probability`.
///
/// Stands in for a real prober; the same seed reproduces the same stream.
#[derive(Debug)]
pub struct SyntheticSource {
    seed: u64,
    rng: StdRng,
    base_ms: f64,
    jitter_ms: f64,
    loss_probability: f64,
    max_attempts: Option<usize>,
    produced: usize,
}

impl SyntheticSource {
    pub fn new(
        base_ms: f64,
        jitter_ms: f64,
        loss_probability: f64,
        max_attempts: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !(base_ms.is_finite() && base_ms >= 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "base latency must be finite and >= 0",
            ));
        }
        if !(jitter_ms.is_finite() && jitter_ms >= 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "jitter must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&loss_probability) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "loss probability must be in [0, 1]",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            base_ms,
            jitter_ms,
            loss_probability,
            max_attempts,
            produced: 0,
        })
    }

    #[inline]
    fn gen_rtt(&mut self) -> f64 {
        if self.jitter_ms == 0.0 {
            self.base_ms
        } else {
            self.base_ms + self.rng.random_range(0.0..self.jitter_ms)
        }
    }
}

impl SampleSource for SyntheticSource {
    fn has_more_attempts(&self) -> bool {
        self.max_attempts.is_none_or(|max| self.produced < max)
    }

    fn next_attempt(&mut self) -> Option<ProbeOutcome> {
        if !self.has_more_attempts() {
            return None;
        }
        self.produced += 1;

        if self.rng.random_bool(self.loss_probability) {
            return Some(ProbeOutcome::Lost);
        }
        Some(ProbeOutcome::Reply(self.gen_rtt()))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
