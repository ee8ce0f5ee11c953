use crate::core::RttError;
use crate::evaluation::Measurement;
use crate::series::SeriesColumn;
use std::fmt::{Display, Formatter};
use strum::IntoEnumIterator;

/// Mean and (when defined) unbiased standard deviation of one sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceStats {
    pub count: usize,
    pub mean: f64,
    pub stdev: Option<f64>,
}

/// Batch summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub sample_rtt: SequenceStats,
    pub estimated_rtt: SequenceStats,
    pub dev_rtt: SequenceStats,
    pub timeout_interval: SequenceStats,
    pub packet_loss_ratio: f64,
}

impl StatsSummary {
    pub fn sequence(&self, column: SeriesColumn) -> &SequenceStats {
        match column {
            SeriesColumn::SampleRtt => &self.sample_rtt,
            SeriesColumn::EstimatedRtt => &self.estimated_rtt,
            SeriesColumn::DevRtt => &self.dev_rtt,
            SeriesColumn::TimeoutInterval => &self.timeout_interval,
        }
    }

    #[inline]
    pub fn mean(&self, column: SeriesColumn) -> f64 {
        self.sequence(column).mean
    }

    /// Standard deviation of `column`, or `InsufficientData` below two points.
    pub fn stdev(&self, column: SeriesColumn) -> Result<f64, RttError> {
        let seq = self.sequence(column);
        seq.stdev.ok_or(RttError::InsufficientData {
            needed: 2,
            got: seq.count,
        })
    }

    /// Flattens the summary into named measurements, preserving column order.
    /// Undefined standard deviations are omitted.
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = Vec::with_capacity(9);
        for col in SeriesColumn::iter() {
            let seq = self.sequence(col);
            out.push(Measurement::millis(format!("{col}.mean"), seq.mean));
            if let Some(s) = seq.stdev {
                out.push(Measurement::millis(format!("{col}.stdev"), s));
            }
        }
        out.push(Measurement::ratio("packet_loss_ratio", self.packet_loss_ratio));
        out
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.measurements()
            .into_iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}

impl Display for StatsSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "n={}", self.sample_rtt.count)?;
        for col in SeriesColumn::iter() {
            let seq = self.sequence(col);
            match seq.stdev {
                Some(s) => write!(f, ", {col}={:.3}±{:.3}ms", seq.mean, s)?,
                None => write!(f, ", {col}={:.3}ms", seq.mean)?,
            }
        }
        write!(f, ", loss={:.2}%", self.packet_loss_ratio * 100.0)
    }
}
