use crate::config::RunParams;
use crate::core::{ProbeOutcome, RttError, Sample};
use crate::estimation::{Estimator, RttEstimator};
use crate::series::SeriesAccumulator;
use crate::sources::SampleSource;
use crate::tasks::{ProgressSnapshot, RunReport};
use chrono::Utc;
use std::sync::mpsc::Sender;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives one probe stream: pulls up to `target_count` attempts from the
/// source, feeds accepted samples through the estimator and records the
/// aligned results.
///
/// The run owns its estimator and series; independent streams need
/// independent runs.
pub struct ProbeRun {
    source: Box<dyn SampleSource>,
    estimator: Box<dyn Estimator>,
    series: SeriesAccumulator,

    target_count: u64,
    progress_frequency: u64,

    attempts: u64,
    lost: u64,
    rejected: u64,
    start_time: Instant,

    progress_tx: Option<Sender<ProgressSnapshot>>,
}

impl ProbeRun {
    pub fn new(
        source: Box<dyn SampleSource>,
        estimator: Box<dyn Estimator>,
        target_count: u64,
        progress_frequency: u64,
    ) -> Result<Self, RttError> {
        if target_count == 0 {
            return Err(RttError::config("target_count must be > 0"));
        }
        if progress_frequency == 0 {
            return Err(RttError::config("progress_frequency must be > 0"));
        }

        Ok(Self {
            source,
            estimator,
            series: SeriesAccumulator::with_capacity(target_count.min(4096) as usize),
            target_count,
            progress_frequency,
            attempts: 0,
            lost: 0,
            rejected: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }

    /// Builds a run with a fresh [`RttEstimator`] configured from `params`.
    pub fn from_params(params: &RunParams, source: Box<dyn SampleSource>) -> Result<Self, RttError> {
        params.validate()?;
        let estimator = RttEstimator::new(params.estimator_config()?);
        Self::new(
            source,
            Box::new(estimator),
            params.target_count,
            params.progress_frequency,
        )
    }

    pub fn with_progress(mut self, tx: Sender<ProgressSnapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Runs the stream to completion and hands back the finalized series.
    pub fn run(mut self) -> RunReport {
        let started_at = Utc::now();
        self.start_time = Instant::now();
        self.estimator.reset();

        info!(target_count = self.target_count, "probe run started");

        while self.attempts < self.target_count && self.source.has_more_attempts() {
            let Some(outcome) = self.source.next_attempt() else {
                break;
            };
            let index = self.attempts;
            self.attempts += 1;

            match outcome {
                ProbeOutcome::Lost => {
                    self.lost += 1;
                    debug!(index, "probe lost");
                }
                ProbeOutcome::Reply(rtt_ms) => self.accept(index, rtt_ms),
            }

            if self.attempts % self.progress_frequency == 0 {
                self.push_progress();
            }
        }

        self.push_progress();

        let report = RunReport {
            series: self.series.finalize(),
            target_count: self.target_count,
            attempts: self.attempts,
            lost: self.lost,
            rejected: self.rejected,
            started_at,
            elapsed: self.start_time.elapsed(),
        };

        info!(
            attempts = report.attempts,
            successes = report.successes(),
            lost = report.lost,
            rejected = report.rejected,
            unissued = self.target_count - self.attempts,
            "probe run finished"
        );
        report
    }

    fn accept(&mut self, index: u64, rtt_ms: f64) {
        let step = Sample::new(index, rtt_ms)
            .and_then(|sample| self.estimator.update(rtt_ms).map(|est| (sample, est)));

        match step {
            Ok((sample, est)) => {
                debug!(
                    index,
                    rtt_ms,
                    estimated_rtt = est.estimated_rtt,
                    dev_rtt = est.dev_rtt,
                    timeout_interval = est.timeout_interval,
                    "sample accepted"
                );
                self.series.append(sample, est);
            }
            Err(err) => {
                self.rejected += 1;
                warn!(index, %err, "sample rejected");
            }
        }
    }

    fn push_progress(&mut self) {
        let snapshot = ProgressSnapshot {
            attempts: self.attempts,
            successes: self.series.len() as u64,
            lost: self.lost,
            rejected: self.rejected,
            latest: self.estimator.current(),
            seconds: self.start_time.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimatorConfig;
    use crate::series::SeriesColumn;
    use crate::sources::{SyntheticSource, VecSource};
    use crate::testing::SpyEstimator;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::sync::mpsc;

    fn run_of(values: Vec<Option<f64>>, target: u64) -> RunReport {
        let src: Box<dyn SampleSource> = Box::new(VecSource::from_options(values));
        let est: Box<dyn Estimator> = Box::new(RttEstimator::default());
        ProbeRun::new(src, est, target, 10).unwrap().run()
    }

    #[test]
    fn ctor_guards() {
        let src: Box<dyn SampleSource> = Box::new(VecSource::from_replies([1.0]));
        let est: Box<dyn Estimator> = Box::new(RttEstimator::default());
        assert!(matches!(
            ProbeRun::new(src, est, 0, 10),
            Err(RttError::Configuration(_))
        ));

        let src: Box<dyn SampleSource> = Box::new(VecSource::from_replies([1.0]));
        let est: Box<dyn Estimator> = Box::new(RttEstimator::default());
        assert!(matches!(
            ProbeRun::new(src, est, 5, 0),
            Err(RttError::Configuration(_))
        ));
    }

    #[test]
    fn lost_attempts_leave_no_entry() {
        let report = run_of(vec![Some(100.0), None, Some(120.0), None], 4);
        assert_eq!(report.attempts, 4);
        assert_eq!(report.lost, 2);
        assert_eq!(report.successes(), 2);

        let idx: Vec<u64> = report.series.entries().iter().map(|e| e.index).collect();
        assert_eq!(idx, vec![0, 2]);
        assert_eq!(report.series.estimated_rtt(), vec![100.0, 102.5]);
        assert_relative_eq!(report.packet_loss_ratio().unwrap(), 0.5);
    }

    #[test]
    fn stops_at_target_count() {
        let report = run_of((0..50).map(|i| Some(i as f64)).collect(), 10);
        assert_eq!(report.attempts, 10);
        assert_eq!(report.series.len(), 10);
        assert_eq!(report.packet_loss_ratio().unwrap(), 0.0);
    }

    #[test]
    fn short_source_counts_unissued_attempts_as_loss() {
        let report = run_of(vec![Some(1.0); 7], 10);
        assert_eq!(report.attempts, 7);
        assert_relative_eq!(report.packet_loss_ratio().unwrap(), 0.3);
        assert_relative_eq!(report.summary().unwrap().packet_loss_ratio, 0.3);
    }

    #[test]
    fn rejected_samples_are_skipped_without_touching_the_estimate() {
        let noisy = run_of(
            vec![Some(100.0), Some(-1.0), Some(f64::NAN), Some(120.0)],
            4,
        );
        let clean = run_of(vec![Some(100.0), Some(120.0)], 2);

        assert_eq!(noisy.rejected, 2);
        assert_eq!(noisy.lost, 0);
        assert_eq!(noisy.series.estimated_rtt(), clean.series.estimated_rtt());
        assert_eq!(noisy.series.dev_rtt(), clean.series.dev_rtt());
        assert_relative_eq!(noisy.packet_loss_ratio().unwrap(), 0.5);
    }

    #[test]
    fn total_loss_reports_insufficient_data() {
        let report = run_of(vec![None; 5], 5);
        assert!(report.series.is_empty());
        assert_eq!(report.packet_loss_ratio().unwrap(), 1.0);
        assert!(matches!(
            report.summary(),
            Err(RttError::InsufficientData { .. })
        ));
    }

    #[test]
    fn progress_snapshots_periodic_and_final() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        let (tx, rx) = mpsc::channel();
        let src: Box<dyn SampleSource> =
            Box::new(VecSource::from_replies((0..25).map(|i| 10.0 + i as f64)));
        let est: Box<dyn Estimator> = Box::new(RttEstimator::default());
        let report = ProbeRun::new(src, est, 25, 10)
            .unwrap()
            .with_progress(tx)
            .run();

        let snaps: Vec<ProgressSnapshot> = rx.try_iter().collect();
        let attempts: Vec<u64> = snaps.iter().map(|s| s.attempts).collect();
        assert_eq!(attempts, vec![10, 20, 25]);

        let last = snaps.last().unwrap();
        assert_eq!(last.successes, 25);
        assert_eq!(last.latest, report.series.latest().map(|e| e.estimate()));
        assert!(last.to_string().starts_with("attempts=25, ok=25, lost=0, rejected=0, est="));
    }

    #[test]
    fn estimator_is_reset_once_and_fed_only_accepted_replies() {
        let (spy, handle) = SpyEstimator::new();
        let src: Box<dyn SampleSource> =
            Box::new(VecSource::from_options([Some(1.0), None, Some(2.0), Some(-3.0), Some(4.0)]));
        let report = ProbeRun::new(src, Box::new(spy), 5, 2).unwrap().run();

        assert_eq!(handle.resets(), 1);
        assert_eq!(handle.updates(), 3);
        assert_eq!(report.successes(), 3);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn from_params_uses_configured_weights() {
        let mut params = RunParams::new(2);
        params.alpha = 0.5;
        params.beta = 0.5;
        let src: Box<dyn SampleSource> = Box::new(VecSource::from_replies([10.0, 30.0]));
        let report = ProbeRun::from_params(&params, src).unwrap().run();
        assert_eq!(report.series.estimated_rtt(), vec![10.0, 20.0]);
        assert_eq!(report.series.dev_rtt(), vec![0.0, 5.0]);

        params.alpha = 0.0;
        let src: Box<dyn SampleSource> = Box::new(VecSource::from_replies([1.0]));
        assert!(matches!(
            ProbeRun::from_params(&params, src),
            Err(RttError::Configuration(_))
        ));
    }

    #[test]
    fn independent_streams_do_not_share_state() {
        let handles: Vec<_> = [(5.0, 1u64), (80.0, 2u64)]
            .into_iter()
            .map(|(base, seed)| {
                std::thread::spawn(move || {
                    let src = SyntheticSource::new(base, 2.0, 0.1, Some(200), seed).unwrap();
                    let est = RttEstimator::new(EstimatorConfig::default());
                    let report = ProbeRun::new(Box::new(src), Box::new(est), 200, 50)
                        .unwrap()
                        .run();
                    report.summary().unwrap().mean(SeriesColumn::EstimatedRtt)
                })
            })
            .collect();
        let means: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!((5.0..7.0).contains(&means[0]), "{}", means[0]);
        assert!((80.0..82.0).contains(&means[1]), "{}", means[1]);
    }

    proptest! {
        #[test]
        fn series_invariants_hold(values in prop::collection::vec(prop::option::of(0.0f64..1_000.0), 1..120)) {
            let target = values.len() as u64;
            let ok = values.iter().filter(|v| v.is_some()).count();
            let report = run_of(values, target);
            let s = &report.series;

            prop_assert_eq!(s.len(), ok);
            prop_assert_eq!(s.samples().len(), s.estimated_rtt().len());
            prop_assert_eq!(s.dev_rtt().len(), s.timeout_interval().len());
            if let Some(first) = s.entries().first() {
                prop_assert_eq!(first.estimated_rtt, first.sample_rtt);
                prop_assert_eq!(first.dev_rtt, 0.0);
            }
            for e in s.entries() {
                prop_assert!(e.timeout_interval >= e.estimated_rtt);
            }
        }

        #[test]
        fn constant_input_is_flat(c in 0.0f64..1_000.0, n in 1usize..100) {
            let report = run_of(vec![Some(c); n], n as u64);
            for e in report.series.entries() {
                prop_assert_eq!(e.estimated_rtt, c);
                prop_assert_eq!(e.dev_rtt, 0.0);
            }
        }
    }
}
