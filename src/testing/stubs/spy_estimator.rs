use crate::core::RttError;
use crate::estimation::{Estimator, EstimatorState, RttEstimate, RttEstimator};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps an [`RttEstimator`] and counts calls reaching it.
pub struct SpyEstimator {
    inner: RttEstimator,
    updates: Arc<AtomicUsize>,
    resets: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub struct SpyHandle {
    updates: Arc<AtomicUsize>,
    resets: Arc<AtomicUsize>,
}

impl SpyHandle {
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }

    pub fn resets(&self) -> usize {
        self.resets.load(Ordering::Relaxed)
    }
}

impl SpyEstimator {
    pub fn new() -> (Self, SpyHandle) {
        let updates = Arc::new(AtomicUsize::new(0));
        let resets = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner: RttEstimator::default(),
                updates: Arc::clone(&updates),
                resets: Arc::clone(&resets),
            },
            SpyHandle { updates, resets },
        )
    }
}

impl Estimator for SpyEstimator {
    fn update(&mut self, sample_ms: f64) -> Result<RttEstimate, RttError> {
        self.updates.fetch_add(1, Ordering::Relaxed);
        self.inner.update(sample_ms)
    }

    fn reset(&mut self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
        self.inner.reset()
    }

    fn state(&self) -> EstimatorState {
        self.inner.state()
    }
}
