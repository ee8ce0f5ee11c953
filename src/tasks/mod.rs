mod probe_run;
mod progress;
mod report;

pub use probe_run::ProbeRun;
pub use progress::ProgressSnapshot;
pub use report::RunReport;
