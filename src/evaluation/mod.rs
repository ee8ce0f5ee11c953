mod aggregator;
mod measurement;
mod moments;
mod summary;

pub use aggregator::StatsAggregator;
pub use measurement::Measurement;
pub use moments::{mean, stdev};
pub use summary::{SequenceStats, StatsSummary};
