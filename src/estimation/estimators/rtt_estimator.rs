use crate::core::RttError;
use crate::core::samples::validate_rtt;
use crate::estimation::{Estimator, EstimatorConfig, EstimatorState, RttEstimate};
use tracing::trace;

/// Weight of `DevRTT` in the derived timeout interval.
pub const DEV_MULTIPLIER: f64 = 4.0;

/// Exponentially smoothed RTT estimator (EstimatedRTT / DevRTT / TimeoutInterval).
///
/// ```text
/// est_i     = (1 - alpha) * est_{i-1} + alpha * s_i
/// dev_i     = (1 - beta)  * dev_{i-1} + beta  * |s_i - est_i|
/// timeout_i = est_i + 4 * dev_i
/// ```
///
/// The first accepted sample seeds `est = s_0`, `dev = 0`. One instance
/// tracks exactly one probe stream.
#[derive(Debug, Clone, Default)]
pub struct RttEstimator {
    config: EstimatorConfig,
    state: EstimatorState,
    accepted: u64,
}

impl RttEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            state: EstimatorState::Uninitialized,
            accepted: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Number of samples accepted since construction or the last reset.
    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    fn step(&self, prev: RttEstimate, sample: f64) -> RttEstimate {
        let alpha = self.config.alpha();
        let beta = self.config.beta();

        // incremental form of (1 - w) * prev + w * x; exact on constant input
        let estimated_rtt = prev.estimated_rtt + alpha * (sample - prev.estimated_rtt);
        // deviation is taken against the freshly updated estimate
        let residual = (sample - estimated_rtt).abs();
        let dev_rtt = prev.dev_rtt + beta * (residual - prev.dev_rtt);

        RttEstimate {
            estimated_rtt,
            dev_rtt,
            timeout_interval: estimated_rtt + DEV_MULTIPLIER * dev_rtt,
        }
    }
}

impl Estimator for RttEstimator {
    fn update(&mut self, sample_ms: f64) -> Result<RttEstimate, RttError> {
        validate_rtt(sample_ms)?;

        let next = match self.state {
            EstimatorState::Uninitialized => {
                trace!(sample_ms, "estimator seeded");
                RttEstimate {
                    estimated_rtt: sample_ms,
                    dev_rtt: 0.0,
                    timeout_interval: sample_ms,
                }
            }
            EstimatorState::Tracking(prev) => self.step(prev, sample_ms),
        };

        self.state = EstimatorState::Tracking(next);
        self.accepted += 1;
        Ok(next)
    }

    fn reset(&mut self) {
        trace!(accepted = self.accepted, "estimator reset");
        self.state = EstimatorState::Uninitialized;
        self.accepted = 0;
    }

    #[inline]
    fn state(&self) -> EstimatorState {
        self.state
    }
}
