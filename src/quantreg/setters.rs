use crate::quantreg::config::QuantRegConfig;

impl QuantRegConfig {
    // Set methods for parameters

    /// Set the monotonicity direction.
    /// * `increasing` - If true, conditional quantiles are non-decreasing in `x`.
    pub fn set_increasing(mut self, increasing: bool) -> Self {
        self.increasing = increasing;
        self
    }

    /// Set the grid size.
    /// * `npt` - Number of thresholds between min(y) and max(y). The quantile
    ///   estimate can only take these values, so a larger grid gives finer
    ///   resolution at the cost of one isotonic fit per threshold.
    pub fn set_npt(mut self, npt: usize) -> Self {
        self.npt = npt;
        self
    }

    /// Set parallel execution.
    /// * `parallel` - Fit grid rows and answer queries on the rayon thread pool.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
