//! Monotone regression and monotone conditional quantile estimation.
//!
//! [`IsotonicRegression`] fits the closest monotone sequence to paired data with
//! the pool adjacent violators algorithm. [`QuantileRegression`] estimates
//! conditional quantiles of `y` given `x` by fitting a grid of isotonic
//! regressions to the indicators `y <= t`.
//!
//! ```
//! use isotonic::{IsotonicRegression, QuantileRegression};
//!
//! let x = [1., 2., 3., 4., 5., 6.];
//! let y = [1., 5., 4., 6., 6., 5.];
//! let mut ir = IsotonicRegression::new(&x, &y, true).unwrap();
//! assert_eq!(ir.fit()[1], 4.5);
//!
//! let qr = QuantileRegression::new(&x, &y, true, 50).unwrap();
//! let median = qr.fit(0.5);
//! assert_eq!(median.len(), x.len());
//! ```

// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod isotonic;
pub mod metric;
pub mod quantreg;
pub mod utils;

// Individual classes, and functions
pub use data::Sample;
pub use errors::IsotonicError;
pub use isotonic::{pool_adjacent_violators, IsotonicRegression};
pub use quantreg::{QuantRegConfig, QuantileRegression};
