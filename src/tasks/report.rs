use crate::core::RttError;
use crate::evaluation::{StatsAggregator, StatsSummary};
use crate::series::Series;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Outcome of a finished probe run. The series is finalized and read-only.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub series: Series,
    pub target_count: u64,
    pub attempts: u64,
    pub lost: u64,
    pub rejected: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl RunReport {
    #[inline]
    pub fn successes(&self) -> u64 {
        self.series.len() as u64
    }

    pub fn packet_loss_ratio(&self) -> Result<f64, RttError> {
        StatsAggregator::new(self.target_count)?.packet_loss_ratio(&self.series)
    }

    pub fn summary(&self) -> Result<StatsSummary, RttError> {
        StatsAggregator::new(self.target_count)?.aggregate(&self.series)
    }
}
