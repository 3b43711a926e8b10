//! Metrics
//!
//! Goodness-of-fit measures for monotone fits and quantile curves.

/// Sum of squared differences between `y` and `yhat`.
pub fn sum_squared_error(y: &[f64], yhat: &[f64]) -> f64 {
    y.iter().zip(yhat).map(|(y_, yhat_)| (y_ - yhat_).powi(2)).sum::<f64>()
}

/// Mean pinball loss of `yhat` as an estimate of the `p`-th quantile of `y`.
pub fn quantile_loss(y: &[f64], yhat: &[f64], p: f64) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let res = y
        .iter()
        .zip(yhat)
        .map(|(y_, yhat_)| {
            let s = *y_ - *yhat_;
            if s >= 0.0 {
                p * s
            } else {
                (p - 1.0) * s
            }
        })
        .sum::<f64>();
    res / y.len() as f64
}

/// Largest absolute elementwise difference.
pub fn max_abs_deviation(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a_, b_)| (a_ - b_).abs()).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;

    #[test]
    fn test_sum_squared_error() {
        let y = vec![1., 3., 4., 5., 2., 4., 6.];
        let yhat = vec![3., 2., 3., 4., 4., 4., 4.];
        assert_eq!(sum_squared_error(&y, &yhat), 15.);
        assert_eq!(sum_squared_error(&y, &y), 0.);
    }

    #[test]
    fn test_quantile_loss() {
        let y = vec![1., 3., 4., 5., 2., 4., 6.];
        let yhat = vec![3., 2., 3., 4., 4., 4., 4.];
        // Under-predictions weigh 0.25, over-predictions 0.75.
        let res = quantile_loss(&y, &yhat, 0.25);
        assert_eq!(precision_round(res, 6), precision_round((0.25 * 5. + 0.75 * 4.) / 7., 6));
        assert_eq!(quantile_loss(&[], &[], 0.5), 0.);
    }

    #[test]
    fn test_max_abs_deviation() {
        assert_eq!(max_abs_deviation(&[1., 2., 3.], &[1.5, 0., 3.]), 2.);
        assert_eq!(max_abs_deviation(&[], &[]), 0.);
    }
}
