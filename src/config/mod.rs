//! Configuration module
//!
//! Holds the immutable sampler configuration, its validation, and the CLI
//! argument model used by the demo binary.

pub mod cli;
pub mod validator;

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default discretization resolution
pub const DEFAULT_GRANULARITY: u32 = 100;

/// Lowest accepted granularity
pub const MIN_GRANULARITY: u32 = 10;

/// Highest accepted granularity
pub const MAX_GRANULARITY: u32 = 100;

/// Largest number of distinct values a range may cover
///
/// The bucket model keeps one quota per value and is rebuilt on every call,
/// so the range is capped at a size that still builds in a few milliseconds.
pub const MAX_SPAN: u64 = 1_000_000;

/// Sampler configuration
///
/// An immutable value passed explicitly to every operation. Build it with
/// [`configure`] or [`SamplerConfig::new`]; both validate before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Value the distribution is biased toward
    pub center: i64,
    /// Bias strength in percent (0 = uniform, 100 = maximal bias)
    pub strength: u32,
    /// Half-width of the biased region around `center`, in value units
    pub spread: u64,
    /// Discretization resolution (10-100)
    #[serde(default = "default_granularity")]
    pub granularity: u32,
}

fn default_granularity() -> u32 {
    DEFAULT_GRANULARITY
}

/// Build and validate a configuration with an explicit granularity
pub fn configure(
    min: i64,
    max: i64,
    center: i64,
    strength: u32,
    spread: u64,
    granularity: u32,
) -> Result<SamplerConfig> {
    let config = SamplerConfig {
        min,
        max,
        center,
        strength,
        spread,
        granularity,
    };
    config.validate()?;
    Ok(config)
}

impl SamplerConfig {
    /// Build and validate a configuration using [`DEFAULT_GRANULARITY`]
    pub fn new(min: i64, max: i64, center: i64, strength: u32, spread: u64) -> Result<Self> {
        configure(min, max, center, strength, spread, DEFAULT_GRANULARITY)
    }

    /// Return a copy with a different granularity, revalidated
    pub fn with_granularity(self, granularity: u32) -> Result<Self> {
        configure(
            self.min,
            self.max,
            self.center,
            self.strength,
            self.spread,
            granularity,
        )
    }

    /// Validate the configuration
    ///
    /// Fields are public, so a config built by hand or deserialized is
    /// checked again by every operation before use.
    pub fn validate(&self) -> Result<()> {
        validator::validate_config(self)
    }

    /// Number of integer values in `[min, max]`
    ///
    /// Zero when `min > max`; saturates at `u64::MAX` for the full `i64` range.
    pub fn span(&self) -> u64 {
        let span = (self.max as i128 - self.min as i128 + 1).max(0);
        u64::try_from(span).unwrap_or(u64::MAX)
    }

    /// Inclusive bounds of the biased region, clamped to `[min, max]`
    pub fn biased_region(&self) -> (i64, i64) {
        let low = self.center.saturating_sub_unsigned(self.spread).max(self.min);
        let high = self.center.saturating_add_unsigned(self.spread).min(self.max);
        (low, high)
    }
}

impl fmt::Display for SamplerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.biased_region();
        write!(
            f,
            "range=[{}, {}] center={} strength={}% spread={} (biased [{}, {}]) granularity={}",
            self.min, self.max, self.center, self.strength, self.spread, low, high, self.granularity
        )
    }
}
