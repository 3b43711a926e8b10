//! Data
//!
//! The paired sample that both regression engines fit against.
use crate::errors::IsotonicError;
use crate::utils::sort_pair;

/// Paired observations ordered by ascending covariate.
///
/// Equal `x` values keep the relative order they had in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Sample {
    /// Pair `x` with `y` and sort both by `x`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the lengths differ, the arrays are empty, or `x` holds a NaN.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, IsotonicError> {
        let (x, y) = sort_pair(x, y)?;
        Ok(Sample { x, y })
    }

    /// Wrap arrays that are already ordered by `x`.
    pub(crate) fn from_sorted(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Sample { x, y }
    }

    /// Reverse both arrays in place. Applying it twice restores the original order.
    pub fn reverse(&mut self) {
        self.x.reverse();
        self.y.reverse();
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Smallest and largest response value.
    pub fn y_range(&self) -> (f64, f64) {
        self.y
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }
}
