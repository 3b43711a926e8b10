//! Quantile Regression Configuration
//!
//! Parameters of the conditional quantile estimator. The configuration can be
//! built with setters or parsed from a JSON document; absent fields take their
//! defaults.
use crate::constants::DEFAULT_NPT;
use crate::errors::IsotonicError;
use crate::utils::validate_grid_size;
use serde::{Deserialize, Serialize};

fn default_increasing() -> bool {
    true
}
fn default_npt() -> usize {
    DEFAULT_NPT
}
fn default_parallel() -> bool {
    false
}

/// Configuration for the `QuantileRegression`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantRegConfig {
    /// If true, the conditional quantiles are non-decreasing in `x`,
    /// i.e. P(Y <= y | X = x) is non-increasing in `x` for fixed `y`.
    #[serde(default = "default_increasing")]
    pub increasing: bool,
    /// Number of equally spaced thresholds between min(y) and max(y).
    #[serde(default = "default_npt")]
    pub npt: usize,
    /// Build the grid and answer queries on the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for QuantRegConfig {
    fn default() -> Self {
        QuantRegConfig {
            increasing: default_increasing(),
            npt: default_npt(),
            parallel: default_parallel(),
        }
    }
}

impl QuantRegConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, IsotonicError> {
        serde_json::from_str::<QuantRegConfig>(json_str)
            .map_err(|e| IsotonicError::UnableToParseConfig(e.to_string()))
    }

    /// Check the parameters before fitting.
    pub fn validate(&self) -> Result<(), IsotonicError> {
        validate_grid_size(self.npt)
    }
}
