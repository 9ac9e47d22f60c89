//! Bucket model: discrete weighted multiset over an integer range
//!
//! The bucket model turns a [`SamplerConfig`] into per-value integer quotas.
//! Conceptually it is the flat sequence where every value `v` in `[min, max]`
//! is repeated `quota[v]` times; a draw picks a uniform position in that
//! sequence.
//!
//! # Construction
//!
//! 1. Every value gets the uniform floor `granularity * (100 - strength) / 100`
//!    (integer division), so every value stays reachable under any bias.
//! 2. The remaining `(granularity - floor) * span` entries form the extra pool.
//! 3. A normal density centred on `center` with σ = biased width / 6 is
//!    normalized over the whole range.
//! 4. Only values inside the biased region receive their share of the extra
//!    pool, rounded half away from zero.
//!
//! The model is a pure function of the configuration: the same config always
//! yields the same quotas.
//!
//! # Performance
//!
//! Building is O(span). Lookups binary search a prefix-sum table, so the flat
//! sequence is never materialized and a draw is O(log span).
//!
//! # Example
//!
//! ```
//! use rangebias::{configure, distribution::bucket::BucketModel};
//!
//! let config = configure(1, 10, 7, 70, 3, 100).unwrap();
//! let model = BucketModel::build(&config).unwrap();
//! assert_eq!(model.quota(1), Some(30));
//! assert!(model.quota(7) > model.quota(6));
//! ```

use super::gaussian::NormalDensity;
use crate::config::SamplerConfig;
use crate::Result;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Per-value quotas derived from a sampler configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketModel {
    /// Value at index 0
    min: i64,

    /// Quota per value, indexed by `value - min`
    quotas: Vec<u64>,

    /// Inclusive prefix sums of `quotas`
    cumulative: Vec<u64>,
}

impl BucketModel {
    /// Validate the configuration and build its bucket model
    pub fn build(config: &SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Build the model for a configuration that already passed validation
    pub(crate) fn from_validated(config: &SamplerConfig) -> Self {
        let span = config.span() as usize;
        let (biased_low, biased_high) = config.biased_region();
        let biased_min_idx = (biased_low - config.min) as usize;
        let biased_max_idx = (biased_high - config.min) as usize;
        let biased_span = biased_max_idx - biased_min_idx + 1;

        let granularity = u64::from(config.granularity);
        let base_quota = granularity * (100 - u64::from(config.strength)) / 100;
        let extra_pool = (granularity - base_quota) * span as u64;

        let mut quotas = vec![base_quota; span];

        if extra_pool > 0 {
            // Offsets from the center keep the density exact for large magnitudes
            let density = NormalDensity::new(0.0, biased_span as f64 / 6.0);
            let total_probability =
                density.total_over(config.min - config.center, config.max - config.center);

            for (idx, quota) in quotas
                .iter_mut()
                .enumerate()
                .take(biased_max_idx + 1)
                .skip(biased_min_idx)
            {
                let offset = config.min + idx as i64 - config.center;
                let share = extra_pool as f64 * density.pdf(offset as f64) / total_probability;
                *quota += share.round() as u64;
            }
        }

        let cumulative: Vec<u64> = quotas
            .iter()
            .scan(0u64, |running, &quota| {
                *running += quota;
                Some(*running)
            })
            .collect();

        let model = Self {
            min: config.min,
            quotas,
            cumulative,
        };

        debug!(
            span,
            biased_low,
            biased_high,
            base_quota,
            extra_pool,
            total = model.total(),
            "built bucket model"
        );

        model
    }

    /// Lowest value in the model
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Highest value in the model
    pub fn max(&self) -> i64 {
        self.min + (self.quotas.len() as i64 - 1)
    }

    /// Quota for each value, indexed by `value - min`
    pub fn quotas(&self) -> &[u64] {
        &self.quotas
    }

    /// Quota for a single value, `None` outside `[min, max]`
    pub fn quota(&self, value: i64) -> Option<u64> {
        let idx = usize::try_from(value.checked_sub(self.min)?).ok()?;
        self.quotas.get(idx).copied()
    }

    /// Length of the expanded sequence (sum of all quotas)
    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Alias for [`total`](Self::total)
    pub fn len(&self) -> u64 {
        self.total()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Value at `index` of the expanded sequence
    ///
    /// Returns `None` when `index >= len()`.
    pub fn value_at(&self, index: u64) -> Option<i64> {
        (index < self.total()).then(|| self.min + self.position_of(index) as i64)
    }

    /// Index into `quotas` of the bucket holding expanded position `index`
    ///
    /// Caller guarantees `index < total()`.
    #[inline]
    fn position_of(&self, index: u64) -> usize {
        self.cumulative.partition_point(|&end| end <= index)
    }

    /// Iterate the expanded sequence: each value repeated `quota` times
    pub fn iter_expanded(&self) -> impl Iterator<Item = i64> + '_ {
        self.quotas
            .iter()
            .enumerate()
            .flat_map(move |(idx, &quota)| {
                std::iter::repeat(self.min + idx as i64).take(quota as usize)
            })
    }

    /// Exact selection probability per value, in percent
    ///
    /// Values with a zero quota are omitted.
    pub fn percentages(&self) -> BTreeMap<i64, f64> {
        let total = self.total() as f64;
        self.quotas
            .iter()
            .enumerate()
            .filter(|(_, &quota)| quota > 0)
            .map(|(idx, &quota)| (self.min + idx as i64, 100.0 * quota as f64 / total))
            .collect()
    }

    /// Draw one value using the supplied generator
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let index = rng.gen_range(0..self.total());
        let value = self.min + self.position_of(index) as i64;
        trace!(index, value, "drew value");
        value
    }

    /// Draw `times` values and count how often each value came up
    ///
    /// Every value in `[min, max]` is present, including those never drawn.
    pub fn tally<R: Rng + ?Sized>(&self, times: u64, rng: &mut R) -> BTreeMap<i64, u64> {
        let total = self.total();
        let mut counts = vec![0u64; self.quotas.len()];

        for _ in 0..times {
            let index = rng.gen_range(0..total);
            counts[self.position_of(index)] += 1;
        }

        debug!(times, values = counts.len(), "tallied draws");

        counts
            .into_iter()
            .enumerate()
            .map(|(idx, count)| (self.min + idx as i64, count))
            .collect()
    }
}
