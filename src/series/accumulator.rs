use crate::core::Sample;
use crate::estimation::RttEstimate;
use crate::series::{SeriesColumn, SeriesEntry};

/// Append-only store of per-arrival results for one run.
///
/// Entries keep strict arrival order. Calling [`finalize`](Self::finalize)
/// consumes the accumulator, so nothing can be appended once the series has
/// been handed over for statistics.
#[derive(Debug, Clone, Default)]
pub struct SeriesAccumulator {
    entries: Vec<SeriesEntry>,
}

impl SeriesAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn append(&mut self, sample: Sample, estimate: RttEstimate) {
        self.entries.push(SeriesEntry::new(sample, estimate))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn column(&self, column: SeriesColumn) -> Vec<f64> {
        project(&self.entries, column)
    }

    pub fn finalize(self) -> Series {
        Series {
            entries: self.entries,
        }
    }
}

/// Finalized, read-only series of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    entries: Vec<SeriesEntry>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<SeriesEntry> {
        self.entries.last().copied()
    }

    pub fn column(&self, column: SeriesColumn) -> Vec<f64> {
        project(&self.entries, column)
    }

    pub fn samples(&self) -> Vec<f64> {
        self.column(SeriesColumn::SampleRtt)
    }

    pub fn estimated_rtt(&self) -> Vec<f64> {
        self.column(SeriesColumn::EstimatedRtt)
    }

    pub fn dev_rtt(&self) -> Vec<f64> {
        self.column(SeriesColumn::DevRtt)
    }

    pub fn timeout_interval(&self) -> Vec<f64> {
        self.column(SeriesColumn::TimeoutInterval)
    }
}

fn project(entries: &[SeriesEntry], column: SeriesColumn) -> Vec<f64> {
    entries.iter().map(|e| e.value(column)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::{Estimator, RttEstimator};
    use strum::IntoEnumIterator;

    fn build(samples: &[(u64, f64)]) -> SeriesAccumulator {
        let mut est = RttEstimator::default();
        let mut acc = SeriesAccumulator::new();
        for &(i, v) in samples {
            let s = Sample::new(i, v).unwrap();
            let e = est.update(v).unwrap();
            acc.append(s, e);
        }
        acc
    }

    #[test]
    fn default_is_empty() {
        let acc = SeriesAccumulator::default();
        assert_eq!(acc.len(), 0);
        assert!(acc.is_empty());
        let series = acc.finalize();
        assert!(series.is_empty());
        assert!(series.latest().is_none());
        assert!(series.samples().is_empty());
    }

    #[test]
    fn append_preserves_arrival_order_and_duplicates() {
        let acc = build(&[(0, 30.0), (2, 10.0), (3, 10.0), (5, 20.0)]);
        assert_eq!(acc.len(), 4);
        assert_eq!(acc.column(SeriesColumn::SampleRtt), vec![30.0, 10.0, 10.0, 20.0]);
        let idx: Vec<u64> = acc.entries().iter().map(|e| e.index).collect();
        assert_eq!(idx, vec![0, 2, 3, 5]);
    }

    #[test]
    fn projections_are_aligned() {
        let series = build(&[(0, 100.0), (1, 120.0), (2, 90.0)]).finalize();
        for col in SeriesColumn::iter() {
            assert_eq!(series.column(col).len(), series.len());
        }
        assert_eq!(series.samples()[0], series.estimated_rtt()[0]);
        assert_eq!(series.dev_rtt()[0], 0.0);
        for (t, e) in series.timeout_interval().iter().zip(series.estimated_rtt()) {
            assert!(*t >= e);
        }
    }

    #[test]
    fn latest_returns_last_entry() {
        let series = build(&[(0, 100.0), (1, 120.0)]).finalize();
        let last = series.latest().unwrap();
        assert_eq!(last.index, 1);
        assert_eq!(last.sample_rtt, 120.0);
        assert_eq!(last.estimate().estimated_rtt, 102.5);
    }

    #[test]
    fn finalize_keeps_entries() {
        let acc = build(&[(0, 1.0), (1, 2.0)]);
        let before = acc.entries().to_vec();
        let series = acc.finalize();
        assert_eq!(series.entries(), before.as_slice());
    }
}
