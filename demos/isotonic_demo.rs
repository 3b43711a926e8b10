//! Fit a non-decreasing curve through a noisy logistic trend and print the
//! data with the fitted values as JSON.
use isotonic::metric::sum_squared_error;
use isotonic::IsotonicRegression;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Series {
    increasing: bool,
    sse: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    fit: Vec<f64>,
}

fn gendat(n: usize, rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| 16.0 * i as f64 / (n - 1) as f64 - 8.0).collect();
    let y = x
        .iter()
        .map(|x_| {
            let e: f64 = rng.sample(StandardNormal);
            x_.exp() / (1.0 + x_.exp()) + 0.05 * e
        })
        .collect();
    (x, y)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    let (x, y) = gendat(1000, &mut rng);

    let mut series = Vec::new();
    for increasing in [true, false] {
        let mut ir = IsotonicRegression::new(&x, &y, increasing)?;
        let fit = ir.fit();
        series.push(Series {
            increasing,
            sse: sum_squared_error(ir.y(), &fit),
            x: ir.x().to_vec(),
            y: ir.y().to_vec(),
            fit,
        });
    }

    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}
