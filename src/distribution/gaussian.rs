//! Gaussian (normal) density envelope
//!
//! The bucket model does not draw normal variates. It evaluates the normal
//! probability density at every integer in the range and hands out integer
//! quota in proportion to it.
//!
//! # Parameters
//!
//! - **mean**: the configured center value
//! - **stddev**: biased-region width / 6, so the region spans roughly ±3σ
//!
//! # Example
//!
//! ```
//! use rangebias::distribution::gaussian::NormalDensity;
//!
//! let density = NormalDensity::new(7.0, 7.0 / 6.0);
//! assert!(density.pdf(7.0) > density.pdf(4.0));
//! ```

use std::f64::consts::PI;

/// Normal probability density function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDensity {
    /// Mean (peak of the bell curve)
    mean: f64,

    /// Standard deviation (spread)
    stddev: f64,

    /// Precomputed 1 / (stddev * sqrt(2π))
    scale: f64,
}

impl NormalDensity {
    /// Create a new normal density
    ///
    /// # Panics
    ///
    /// Panics if stddev <= 0 or either parameter is not finite.
    pub fn new(mean: f64, stddev: f64) -> Self {
        assert!(mean.is_finite(), "Mean must be finite");
        assert!(stddev.is_finite() && stddev > 0.0, "Standard deviation must be positive");

        Self {
            mean,
            stddev,
            scale: 1.0 / (stddev * (2.0 * PI).sqrt()),
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Density at `x`
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.stddev;
        self.scale * (-0.5 * z * z).exp()
    }

    /// Sum of the density over the integers in `[low, high]`
    ///
    /// This is the normalizing constant for a discrete envelope over that range.
    pub fn total_over(&self, low: i64, high: i64) -> f64 {
        (low..=high).map(|v| self.pdf(v as f64)).sum()
    }
}
