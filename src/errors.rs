//! Errors
//!
//! Custom error types used throughout the `isotonic` crate.
use thiserror::Error;

/// Errors that can occur when constructing a monotone fit.
#[derive(Debug, Error, PartialEq)]
pub enum IsotonicError {
    /// Input arrays or parameters that cannot be fitted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A configuration document could not be parsed.
    #[error("Unable to parse configuration: {0}")]
    UnableToParseConfig(String),
}

impl IsotonicError {
    /// Length mismatch between the covariate and the response.
    pub(crate) fn length_mismatch(x_len: usize, y_len: usize) -> Self {
        IsotonicError::InvalidInput(format!(
            "x and y must have the same length, got {} and {}.",
            x_len, y_len
        ))
    }

    /// Both arrays are empty.
    pub(crate) fn empty() -> Self {
        IsotonicError::InvalidInput("x and y must contain at least one value.".to_string())
    }
}
