mod sample_source;
mod synthetic_source;
mod vec_source;

pub use sample_source::SampleSource;
pub use synthetic_source::SyntheticSource;
pub use vec_source::VecSource;
