//! Weighted range distribution
//!
//! This module turns a [`SamplerConfig`](crate::SamplerConfig) into a discrete
//! probability mass over an integer range and draws from it.
//!
//! # Model
//!
//! - **Uniform floor**: every value in `[min, max]` gets the same base quota,
//!   which shrinks as `strength` grows
//! - **Normal envelope**: the rest of the weight budget follows a bell curve
//!   around `center` and is handed only to values inside the biased region
//! - **Bucket model**: the resulting integer quotas; a value's probability is
//!   its quota over the sum of quotas
//!
//! # Example
//!
//! ```
//! use rangebias::{configure, distribution};
//!
//! let config = configure(1, 10, 7, 70, 3, 100).unwrap();
//!
//! let exact = distribution::distribution(&config).unwrap();
//! assert!((exact.values().sum::<f64>() - 100.0).abs() < 1e-9);
//!
//! let value = distribution::draw(&config).unwrap();
//! assert!((1..=10).contains(&value));
//! ```

pub mod bucket;
pub mod gaussian;
pub mod weighted;

pub use bucket::BucketModel;
pub use weighted::{
    distribution, draw, draw_many, draw_many_with, draw_once, draw_with, WeightedRangeSampler,
};
