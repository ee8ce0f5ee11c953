use crate::core::RttError;

pub const DEFAULT_ALPHA: f64 = 0.125;
pub const DEFAULT_BETA: f64 = 0.25;

/// Smoothing weights of the estimator. `alpha` weights the new sample in
/// `EstimatedRTT`, `beta` weights the new deviation in `DevRTT`.
///
/// Immutable once built; both weights lie in the open interval `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    alpha: f64,
    beta: f64,
}

impl EstimatorConfig {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, RttError> {
        check_weight("alpha", alpha)?;
        check_weight("beta", beta)?;
        Ok(Self { alpha, beta })
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }
}

fn check_weight(name: &str, w: f64) -> Result<(), RttError> {
    // NaN fails both comparisons
    if w > 0.0 && w < 1.0 {
        Ok(())
    } else {
        Err(RttError::config(format!("{name} must be in (0, 1), got {w}")))
    }
}
