use crate::constants::MIN_NPT;
use crate::errors::IsotonicError;

pub fn fmt_vec_output(v: &[f64]) -> String {
    let mut res = String::new();
    if let Some(last) = v.len().checked_sub(1) {
        if last == 0 {
            return format!("{:.4}", v[0]);
        }
        for n in &v[..last] {
            res.push_str(format!("{:.4}", n).as_str());
            res.push_str(", ");
        }
        res.push_str(format!("{:.4}", &v[last]).as_str());
    }
    res
}

// Validation
pub fn validate_paired_input(x: &[f64], y: &[f64]) -> Result<(), IsotonicError> {
    if x.len() != y.len() {
        return Err(IsotonicError::length_mismatch(x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(IsotonicError::empty());
    }
    if let Some(i) = x.iter().position(|v| v.is_nan()) {
        return Err(IsotonicError::InvalidInput(format!(
            "x contains a NaN value at index {}, which has no position in the sort order.",
            i
        )));
    }
    Ok(())
}

pub fn validate_grid_size(npt: usize) -> Result<(), IsotonicError> {
    if npt < MIN_NPT {
        Err(IsotonicError::InvalidInput(format!(
            "npt must be at least {}, but {} provided.",
            MIN_NPT, npt
        )))
    } else {
        Ok(())
    }
}

/// Sort `x` ascending and permute `y` the same way.
///
/// The sort is stable, so observations with equal `x` keep their
/// original relative order.
pub fn sort_pair(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>), IsotonicError> {
    validate_paired_input(x, y)?;
    let mut index: Vec<usize> = (0..x.len()).collect();
    // NaN was rejected above, so total_cmp agrees with the numeric order.
    index.sort_by(|a, b| x[*a].total_cmp(&x[*b]));
    let xs = index.iter().map(|i| x[*i]).collect();
    let ys = index.iter().map(|i| y[*i]).collect();
    Ok((xs, ys))
}

/// Check that `v` is non-decreasing (or non-increasing when `increasing` is false).
#[inline]
pub fn is_monotone(v: &[f64], increasing: bool) -> bool {
    v.windows(2).all(|w| if increasing { w[0] <= w[1] } else { w[0] >= w[1] })
}

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
