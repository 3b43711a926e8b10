//! Estimate the 0.25 and 0.75 conditional quantiles of a cubic trend with
//! heteroscedastic noise, in both directions, and print the curves as JSON.
use isotonic::metric::quantile_loss;
use isotonic::{QuantRegConfig, QuantileRegression};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Curve {
    p: f64,
    pinball_loss: f64,
    q: Vec<f64>,
}

#[derive(Serialize)]
struct Report {
    increasing: bool,
    npt: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    curves: Vec<Curve>,
}

fn gendat(n: usize, increasing: bool, rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| 2.0 * i as f64 / (n - 1) as f64 - 1.0).collect();
    let y = x
        .iter()
        .map(|x_| {
            let z: f64 = rng.sample(StandardNormal);
            let e = x_.abs() * z;
            let trend = x_ * x_ * x_;
            if increasing {
                trend + 0.5 * e
            } else {
                -trend + 0.5 * e
            }
        })
        .collect();
    (x, y)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    let ps = [0.25, 0.75];

    let mut reports = Vec::new();
    for increasing in [false, true] {
        let (x, y) = gendat(10_000, increasing, &mut rng);
        let cfg = QuantRegConfig::default()
            .set_increasing(increasing)
            .set_npt(1000)
            .set_parallel(true);
        let qr = QuantileRegression::from_config(&x, &y, &cfg)?;

        let curves = ps
            .iter()
            .zip(qr.fit_many(&ps))
            .map(|(p, q)| Curve {
                p: *p,
                pinball_loss: quantile_loss(qr.y(), &q, *p),
                q,
            })
            .collect();

        reports.push(Report {
            increasing,
            npt: qr.npt(),
            x: qr.x().to_vec(),
            y: qr.y().to_vec(),
            curves,
        });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
