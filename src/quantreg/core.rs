//! Quantile Regression Core
//!
//! Construction of the conditional CDF grid. For each threshold `t` on an
//! equally spaced grid over the range of `y`, the indicator `y <= t` is fitted
//! with an isotonic regression on `x`; the fitted values estimate
//! P(Y <= t | X = x) at every sample point.
use crate::data::Sample;
use crate::errors::IsotonicError;
use crate::isotonic::IsotonicRegression;
use crate::quantreg::config::QuantRegConfig;
use crate::utils::fmt_vec_output;
use log::{debug, warn};
use rayon::prelude::*;

/// Monotone conditional quantile estimator.
#[derive(Debug, Clone)]
pub struct QuantileRegression {
    pub(crate) sample: Sample,
    pub(crate) cfg: QuantRegConfig,
    /// Thresholds at which the conditional CDF is evaluated.
    pub(crate) qp: Vec<f64>,
    /// Row `j` holds the fitted P(Y <= qp[j] | X = x[i]) for every `i`.
    pub(crate) cdf: Vec<Vec<f64>>,
}

impl QuantileRegression {
    /// Creates a new `QuantileRegression` and builds its conditional CDF grid.
    ///
    /// # Arguments
    ///
    /// * `x` - The covariate.
    /// * `y` - The response, same length as `x`.
    /// * `increasing` - If true, the conditional quantiles are non-decreasing in `x`.
    /// * `npt` - Number of grid thresholds, at least 2.
    pub fn new(x: &[f64], y: &[f64], increasing: bool, npt: usize) -> Result<Self, IsotonicError> {
        let cfg = QuantRegConfig::default().set_increasing(increasing).set_npt(npt);
        Self::from_config(x, y, &cfg)
    }

    /// Creates a new `QuantileRegression` using the parameters in `cfg`.
    pub fn from_config(x: &[f64], y: &[f64], cfg: &QuantRegConfig) -> Result<Self, IsotonicError> {
        cfg.validate()?;
        let sample = Sample::new(x, y)?;
        let (qp, cdf) = fitiso(&sample, cfg);
        Ok(QuantileRegression {
            sample,
            cfg: cfg.clone(),
            qp,
            cdf,
        })
    }

    pub fn x(&self) -> &[f64] {
        self.sample.x()
    }

    pub fn y(&self) -> &[f64] {
        self.sample.y()
    }

    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    pub fn increasing(&self) -> bool {
        self.cfg.increasing
    }

    pub fn npt(&self) -> usize {
        self.cfg.npt
    }

    pub fn config(&self) -> &QuantRegConfig {
        &self.cfg
    }

    /// Grid thresholds, ascending from min(y) to max(y).
    pub fn thresholds(&self) -> &[f64] {
        &self.qp
    }

    /// The `npt x n` conditional CDF grid.
    pub fn cdf_grid(&self) -> &[Vec<f64>] {
        &self.cdf
    }
}

/// Equally spaced thresholds over `[ymin, ymax]`, both ends included.
pub(crate) fn thresholds(ymin: f64, ymax: f64, npt: usize) -> Vec<f64> {
    let mut qp: Vec<f64> = (0..npt)
        .map(|j| ymin + (ymax - ymin) * j as f64 / (npt - 1) as f64)
        .collect();
    // Pin the top threshold so max(y) always satisfies y <= qp[npt - 1].
    if let Some(last) = qp.last_mut() {
        *last = ymax;
    }
    qp
}

fn fitiso(sample: &Sample, cfg: &QuantRegConfig) -> (Vec<f64>, Vec<Vec<f64>>) {
    let (ymin, ymax) = sample.y_range();
    if ymin == ymax {
        warn!(
            "All {} response values equal {}, every quantile estimate will be this value.",
            sample.len(),
            ymin
        );
    }
    debug!(
        "Building conditional CDF grid with {} thresholds over {} observations, y range [{}].",
        cfg.npt,
        sample.len(),
        fmt_vec_output(&[ymin, ymax])
    );

    let qp = thresholds(ymin, ymax, cfg.npt);

    // P(Y <= t | X = x) runs opposite to the requested quantile direction.
    let fit_row = |t: &f64| -> Vec<f64> {
        let ind: Vec<f64> = sample.y().iter().map(|v| if *v <= *t { 1.0 } else { 0.0 }).collect();
        IsotonicRegression::from_sample(Sample::from_sorted(sample.x().to_vec(), ind), !cfg.increasing).fit()
    };

    let cdf = if cfg.parallel {
        qp.par_iter().map(fit_row).collect()
    } else {
        qp.iter().map(fit_row).collect()
    };

    (qp, cdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_monotone;

    #[test]
    fn test_thresholds() {
        assert_eq!(thresholds(0., 1., 5), vec![0., 0.25, 0.5, 0.75, 1.]);
        assert_eq!(thresholds(-2., 2., 2), vec![-2., 2.]);
        assert_eq!(thresholds(3., 3., 4), vec![3.; 4]);
        let qp = thresholds(0.1, 0.3, 7);
        assert_eq!(qp[0], 0.1);
        assert_eq!(qp[6], 0.3);
    }

    #[test]
    fn test_grid_shape_and_direction() {
        let x = [5., 1., 4., 2., 3., 6.];
        let y = [3., 1., 2.5, 2., 1.5, 4.];
        for increasing in [true, false] {
            let qr = QuantileRegression::new(&x, &y, increasing, 7).unwrap();
            assert_eq!(qr.x(), &[1., 2., 3., 4., 5., 6.]);
            assert_eq!(qr.thresholds().len(), 7);
            assert_eq!(qr.cdf_grid().len(), 7);
            for row in qr.cdf_grid() {
                assert_eq!(row.len(), 6);
                assert!(is_monotone(row, !increasing));
                assert!(row.iter().all(|v| (0.0..=1.0).contains(v)));
            }
            // The top threshold covers every observation.
            assert!(qr.cdf_grid()[6].iter().all(|v| *v == 1.0));
        }
    }

    #[test]
    fn test_grid_hand_computed() {
        let qr = QuantileRegression::new(&[1., 2., 3.], &[2., 1., 3.], true, 3).unwrap();
        assert_eq!(qr.thresholds(), &[1., 2., 3.]);
        assert_eq!(
            qr.cdf_grid(),
            &[vec![0.5, 0.5, 0.], vec![1., 1., 0.], vec![1., 1., 1.]]
        );
    }

    #[test]
    fn test_degenerate_grid() {
        let qr = QuantileRegression::new(&[1., 2., 3.], &[4., 4., 4.], false, 5).unwrap();
        assert_eq!(qr.thresholds(), &[4.; 5]);
        for row in qr.cdf_grid() {
            assert_eq!(row, &vec![1.; 3]);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let x: Vec<f64> = (0..200).map(|i| ((i * 37) % 200) as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| (v * 0.13).sin() + v / 50.).collect();
        let cfg = QuantRegConfig::default().set_npt(25);
        let seq = QuantileRegression::from_config(&x, &y, &cfg).unwrap();
        let par = QuantileRegression::from_config(&x, &y, &cfg.clone().set_parallel(true)).unwrap();
        assert_eq!(seq.thresholds(), par.thresholds());
        assert_eq!(seq.cdf_grid(), par.cdf_grid());
        assert_eq!(seq.fit(0.3), par.fit(0.3));
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            QuantileRegression::new(&[1., 2.], &[1.], true, 10),
            Err(IsotonicError::InvalidInput(_))
        ));
        assert!(matches!(
            QuantileRegression::new(&[], &[], true, 10),
            Err(IsotonicError::InvalidInput(_))
        ));
        assert!(matches!(
            QuantileRegression::new(&[1., 2.], &[1., 2.], true, 1),
            Err(IsotonicError::InvalidInput(_))
        ));
    }
}
