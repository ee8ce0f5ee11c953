mod accumulator;
mod column;
mod entry;
mod export;

pub use accumulator::{Series, SeriesAccumulator};
pub use column::SeriesColumn;
pub use entry::SeriesEntry;
pub use export::SeriesFormat;
