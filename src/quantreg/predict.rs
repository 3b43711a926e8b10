//! Quantile Regression Predict
//!
//! Quantile lookup on the conditional CDF grid. At each sample point the
//! estimate is the threshold whose fitted CDF value is nearest to `p`; there is
//! no interpolation between neighbouring thresholds.
use crate::quantreg::core::QuantileRegression;
use log::warn;
use rayon::prelude::*;

impl QuantileRegression {
    /// Estimate the `p`-th conditional quantile of `y` at every sample point.
    ///
    /// The result is aligned with `x()`. A `p` outside `[0, 1]` is not an
    /// error: it resolves to the nearest edge of the grid.
    pub fn fit(&self, p: f64) -> Vec<f64> {
        if !(0.0..=1.0).contains(&p) {
            warn!("Probability {} is outside [0, 1], the nearest grid threshold will be used.", p);
        }
        if self.cfg.parallel {
            (0..self.len()).into_par_iter().map(|i| self.quantile_at(i, p)).collect()
        } else {
            (0..self.len()).map(|i| self.quantile_at(i, p)).collect()
        }
    }

    /// Estimate several conditional quantile curves, one per entry of `ps`.
    pub fn fit_many(&self, ps: &[f64]) -> Vec<Vec<f64>> {
        ps.iter().map(|p| self.fit(*p)).collect()
    }

    fn quantile_at(&self, i: usize, p: f64) -> f64 {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (j, row) in self.cdf.iter().enumerate() {
            let d = (row[i] - p).abs();
            // First row wins ties.
            if j == 0 || d < best_dist {
                best = j;
                best_dist = d;
            }
        }
        self.qp[best]
    }
}
