pub mod config;
pub mod core;
pub mod estimation;
pub mod evaluation;
pub mod series;
pub mod sources;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
