//! Quantile Regression
//!
//! Conditional quantiles of `y` given `x` under a monotonicity constraint,
//! estimated from a grid of isotonic fits to threshold indicators.
//! See <https://arxiv.org/pdf/1901.02398.pdf>.

// public modules
pub mod config;
pub mod core;
pub mod predict;

// private modules
mod setters;

pub use self::config::QuantRegConfig;
pub use self::core::QuantileRegression;
