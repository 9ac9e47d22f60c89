//! Weighted range sampler
//!
//! Draws integers from `[min, max]`, biased toward a center value. Every
//! operation validates the configuration and rebuilds the bucket model from
//! scratch, so calls never share state beyond the configuration value itself.
//! Callers that draw in a hot loop can build a [`BucketModel`] once and call
//! [`BucketModel::sample`] directly.
//!
//! # Randomness
//!
//! The free functions ([`draw`], [`draw_many`]) seed a fresh xoshiro256++
//! generator from entropy on every call, so concurrent callers never share a
//! stream. The `_with` variants and [`WeightedRangeSampler`] take any
//! [`rand::Rng`], which is how tests get reproducible draws.
//!
//! # Example
//!
//! ```
//! use rangebias::{configure, WeightedRangeSampler};
//!
//! let config = configure(1, 10, 7, 70, 3, 100).unwrap();
//! let mut sampler = WeightedRangeSampler::with_seed(config, 42).unwrap();
//!
//! let value = sampler.draw();
//! assert!((1..=10).contains(&value));
//!
//! let counts = sampler.draw_many(1000);
//! assert_eq!(counts.values().sum::<u64>(), 1000);
//! ```

use super::bucket::BucketModel;
use crate::config::{configure, SamplerConfig};
use crate::Result;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeMap;

/// Exact selection probability per value, in percent
///
/// Values that can never be drawn are omitted.
pub fn distribution(config: &SamplerConfig) -> Result<BTreeMap<i64, f64>> {
    Ok(BucketModel::build(config)?.percentages())
}

/// Draw one value with a freshly seeded generator
pub fn draw(config: &SamplerConfig) -> Result<i64> {
    draw_with(config, &mut Xoshiro256PlusPlus::from_entropy())
}

/// Draw one value using the supplied generator
pub fn draw_with<R: Rng + ?Sized>(config: &SamplerConfig, rng: &mut R) -> Result<i64> {
    Ok(BucketModel::build(config)?.sample(rng))
}

/// Draw one value from ad hoc parameters, without keeping a configuration
pub fn draw_once(
    min: i64,
    max: i64,
    center: i64,
    strength: u32,
    spread: u64,
    granularity: u32,
) -> Result<i64> {
    draw(&configure(min, max, center, strength, spread, granularity)?)
}

/// Draw `times` values with a freshly seeded generator and tally them
///
/// Every value in `[min, max]` is a key, including values drawn zero times.
pub fn draw_many(config: &SamplerConfig, times: u64) -> Result<BTreeMap<i64, u64>> {
    draw_many_with(config, times, &mut Xoshiro256PlusPlus::from_entropy())
}

/// Draw `times` values using the supplied generator and tally them
pub fn draw_many_with<R: Rng + ?Sized>(
    config: &SamplerConfig,
    times: u64,
    rng: &mut R,
) -> Result<BTreeMap<i64, u64>> {
    // One build serves every draw: the model is a pure function of the config
    Ok(BucketModel::build(config)?.tally(times, rng))
}

/// Sampler owning a validated configuration and its random generator
///
/// Each sampler owns its generator, so give each thread its own sampler.
pub struct WeightedRangeSampler<R = Xoshiro256PlusPlus> {
    config: SamplerConfig,
    rng: R,
}

impl WeightedRangeSampler<Xoshiro256PlusPlus> {
    /// Create a sampler with an entropy-seeded generator
    pub fn new(config: SamplerConfig) -> Result<Self> {
        Self::with_rng(config, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a sampler with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(config: SamplerConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<R: Rng> WeightedRangeSampler<R> {
    /// Create a sampler around an injected generator
    pub fn with_rng(config: SamplerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Build the bucket model for this sampler's configuration
    pub fn bucket_model(&self) -> BucketModel {
        self.model()
    }

    /// Exact selection probability per value, in percent
    pub fn distribution(&self) -> BTreeMap<i64, f64> {
        self.model().percentages()
    }

    /// Draw one value
    pub fn draw(&mut self) -> i64 {
        self.model().sample(&mut self.rng)
    }

    /// Draw `times` values and tally them, every range value present
    pub fn draw_many(&mut self, times: u64) -> BTreeMap<i64, u64> {
        self.model().tally(times, &mut self.rng)
    }

    /// Rebuild the model; the config was validated in `with_rng`
    fn model(&self) -> BucketModel {
        BucketModel::from_validated(&self.config)
    }
}
