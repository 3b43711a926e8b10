#![allow(dead_code)]
use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;

// monotone_pair
//
// Generates (x, y) where y is a cubic trend in x
// plus noise that grows with |x|.
pub(crate) fn monotone_pair(n_samples: usize) -> (Vec<f64>, Vec<f64>) {

    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    let x_distribution = Uniform::new(-1.0, 1.0);
    let noise_distribution = Normal::new(0.0, 1.0).unwrap();

    let mut x: Vec<f64> = Vec::with_capacity(n_samples);
    let mut y: Vec<f64> = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let x_ = rng.sample(x_distribution);
        let e: f64 = rng.sample(noise_distribution);
        x.push(x_);
        y.push(x_ * x_ * x_ + 0.5 * x_.abs() * e);
    }

    (x, y)
}
