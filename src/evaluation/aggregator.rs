use crate::core::RttError;
use crate::evaluation::{SequenceStats, StatsSummary, mean, stdev};
use crate::series::{Series, SeriesColumn};

/// Computes summary statistics over a finalized series.
///
/// `target_count` is the number of planned probe attempts; it fixes the
/// denominator of the packet loss ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsAggregator {
    target_count: u64,
}

impl StatsAggregator {
    pub fn new(target_count: u64) -> Result<Self, RttError> {
        if target_count == 0 {
            return Err(RttError::config("target_count must be > 0"));
        }
        Ok(Self { target_count })
    }

    #[inline]
    pub fn target_count(&self) -> u64 {
        self.target_count
    }

    /// Fraction of planned attempts that produced no series entry.
    pub fn packet_loss_ratio(&self, series: &Series) -> Result<f64, RttError> {
        let got = series.len() as u64;
        if got > self.target_count {
            return Err(RttError::config(format!(
                "series holds {got} entries but only {} attempts were planned",
                self.target_count
            )));
        }
        Ok((self.target_count - got) as f64 / self.target_count as f64)
    }

    /// Summarizes all four sequences.
    ///
    /// Fails with `InsufficientData` on an empty series. A single-point
    /// series yields means without standard deviations.
    pub fn aggregate(&self, series: &Series) -> Result<StatsSummary, RttError> {
        let packet_loss_ratio = self.packet_loss_ratio(series)?;

        Ok(StatsSummary {
            sample_rtt: sequence_stats(&series.column(SeriesColumn::SampleRtt))?,
            estimated_rtt: sequence_stats(&series.column(SeriesColumn::EstimatedRtt))?,
            dev_rtt: sequence_stats(&series.column(SeriesColumn::DevRtt))?,
            timeout_interval: sequence_stats(&series.column(SeriesColumn::TimeoutInterval))?,
            packet_loss_ratio,
        })
    }
}

fn sequence_stats(values: &[f64]) -> Result<SequenceStats, RttError> {
    Ok(SequenceStats {
        count: values.len(),
        mean: mean(values)?,
        stdev: stdev(values).ok(),
    })
}
