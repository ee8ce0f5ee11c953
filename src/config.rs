use crate::core::RttError;
use crate::estimation::{DEFAULT_ALPHA, DEFAULT_BETA, EstimatorConfig};
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_beta() -> f64 {
    DEFAULT_BETA
}

fn default_progress_frequency() -> u64 {
    100
}

/// Parameters of one probe run, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunParams {
    #[serde(default = "default_alpha")]
    #[schemars(
        title = "Alpha",
        description = "Weight of the new sample in EstimatedRTT, in (0, 1)",
        range(min = 0.0, max = 1.0)
    )]
    pub alpha: f64,

    #[serde(default = "default_beta")]
    #[schemars(
        title = "Beta",
        description = "Weight of the new deviation in DevRTT, in (0, 1)",
        range(min = 0.0, max = 1.0)
    )]
    pub beta: f64,

    #[schemars(
        title = "Target Count",
        description = "Number of planned probe attempts",
        range(min = 1)
    )]
    pub target_count: u64,

    #[serde(default = "default_progress_frequency")]
    #[schemars(
        title = "Progress Frequency",
        description = "Emit a progress snapshot every N attempts",
        range(min = 1)
    )]
    pub progress_frequency: u64,
}

impl RunParams {
    pub fn new(target_count: u64) -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            target_count,
            progress_frequency: default_progress_frequency(),
        }
    }

    pub fn schema() -> Schema {
        schema_for!(RunParams)
    }

    pub fn estimator_config(&self) -> Result<EstimatorConfig, RttError> {
        EstimatorConfig::new(self.alpha, self.beta)
    }

    pub fn validate(&self) -> Result<(), RttError> {
        self.estimator_config()?;
        if self.target_count == 0 {
            return Err(RttError::config("target_count must be > 0"));
        }
        if self.progress_frequency == 0 {
            return Err(RttError::config("progress_frequency must be > 0"));
        }
        Ok(())
    }
}

/// Reads and validates run parameters from a JSON file.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<RunParams> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading run parameters from {}", path.display()))?;
    let params: RunParams = serde_json::from_str(&raw)
        .with_context(|| format!("parsing run parameters in {}", path.display()))?;
    params.validate()?;
    Ok(params)
}
