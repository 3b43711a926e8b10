//! Isotonic Regression
//!
//! Least-squares monotone fits using the Pool Adjacent Violators Algorithm (PAVA).
//! A non-increasing fit is computed by reversing the sample, fitting a
//! non-decreasing sequence and reversing the result back.
use crate::data::Sample;
use crate::errors::IsotonicError;

/// A block of adjacent observations that have been merged into one level.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pool {
    /// Weighted mean of the merged responses.
    value: f64,
    /// Number of merged responses.
    weight: f64,
    start: usize,
    end: usize,
}

impl Pool {
    fn new(value: f64, index: usize) -> Self {
        Pool {
            value,
            weight: 1.0,
            start: index,
            end: index,
        }
    }

    /// Merge with the pool directly above this one.
    fn merge(self, upper: Pool) -> Pool {
        let weight = self.weight + upper.weight;
        Pool {
            value: (upper.weight * upper.value + self.weight * self.value) / weight,
            weight,
            start: self.start,
            end: upper.end,
        }
    }
}

/// Closest non-decreasing sequence to `y` in sum of squared errors.
///
/// `y` is taken in the order given. Equal neighbouring values are not
/// violations and are never merged.
pub fn pool_adjacent_violators(y: &[f64]) -> Vec<f64> {
    let mut pools: Vec<Pool> = Vec::with_capacity(y.len());

    for (i, v) in y.iter().enumerate() {
        pools.push(Pool::new(*v, i));
        // Merge down
        while let [.., below, top] = pools[..] {
            if top.value < below.value {
                pools.truncate(pools.len() - 2);
                pools.push(below.merge(top));
            } else {
                break;
            }
        }
    }

    let mut fitted = vec![0.0; y.len()];
    for pool in &pools {
        fitted[pool.start..=pool.end].fill(pool.value);
    }
    fitted
}

/// Monotone regression of `y` on `x`.
#[derive(Debug, Clone)]
pub struct IsotonicRegression {
    sample: Sample,
    increasing: bool,
}

impl IsotonicRegression {
    /// Creates a new `IsotonicRegression`, pairing `y` with `x` and sorting by `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - The covariate.
    /// * `y` - The response, same length as `x`.
    /// * `increasing` - Fit a non-decreasing sequence if true, non-increasing otherwise.
    pub fn new(x: &[f64], y: &[f64], increasing: bool) -> Result<Self, IsotonicError> {
        let sample = Sample::new(x, y)?;
        Ok(Self::from_sample(sample, increasing))
    }

    pub(crate) fn from_sample(sample: Sample, increasing: bool) -> Self {
        IsotonicRegression { sample, increasing }
    }

    /// Reverse the stored `x` and `y` in place.
    pub fn reverse(&mut self) {
        self.sample.reverse();
    }

    /// Fit the monotone sequence, returned in ascending `x` order.
    ///
    /// The stored sample is left in the same order it had before the call.
    pub fn fit(&mut self) -> Vec<f64> {
        if self.increasing {
            return pool_adjacent_violators(self.sample.y());
        }

        self.reverse();
        let mut fitted = pool_adjacent_violators(self.sample.y());
        self.reverse();
        fitted.reverse();
        fitted
    }

    pub fn x(&self) -> &[f64] {
        self.sample.x()
    }

    pub fn y(&self) -> &[f64] {
        self.sample.y()
    }

    pub fn increasing(&self) -> bool {
        self.increasing
    }
}
