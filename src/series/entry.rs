use crate::core::Sample;
use crate::estimation::RttEstimate;
use crate::series::SeriesColumn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// One row of a series: the accepted sample and the estimator output it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub index: u64,
    pub sample_rtt: f64,
    pub estimated_rtt: f64,
    pub dev_rtt: f64,
    pub timeout_interval: f64,
}

impl SeriesEntry {
    #[inline]
    pub fn new(sample: Sample, estimate: RttEstimate) -> Self {
        Self {
            index: sample.index,
            sample_rtt: sample.rtt_ms,
            estimated_rtt: estimate.estimated_rtt,
            dev_rtt: estimate.dev_rtt,
            timeout_interval: estimate.timeout_interval,
        }
    }

    #[inline]
    pub fn value(&self, column: SeriesColumn) -> f64 {
        match column {
            SeriesColumn::SampleRtt => self.sample_rtt,
            SeriesColumn::EstimatedRtt => self.estimated_rtt,
            SeriesColumn::DevRtt => self.dev_rtt,
            SeriesColumn::TimeoutInterval => self.timeout_interval,
        }
    }

    #[inline]
    pub fn estimate(&self) -> RttEstimate {
        RttEstimate {
            estimated_rtt: self.estimated_rtt,
            dev_rtt: self.dev_rtt,
            timeout_interval: self.timeout_interval,
        }
    }
}

impl Display for SeriesEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "#{} sample={:.3}ms est={:.3}ms dev={:.3}ms timeout={:.3}ms",
            self.index, self.sample_rtt, self.estimated_rtt, self.dev_rtt, self.timeout_interval
        )
    }
}
