//! Configuration validation

use super::*;
use crate::SamplerError;

/// Validate complete configuration
///
/// Runs every check before any model is built; the first failure wins.
pub fn validate_config(config: &SamplerConfig) -> Result<()> {
    validate_range(config)?;
    validate_center(config)?;
    validate_strength(config.strength)?;
    validate_granularity(config.granularity)?;

    Ok(())
}

/// Validate the inclusive bounds
fn validate_range(config: &SamplerConfig) -> Result<()> {
    if config.min >= config.max {
        return Err(SamplerError::invalid(format!(
            "min ({}) must be less than max ({})",
            config.min, config.max
        )));
    }

    if config.span() > MAX_SPAN {
        return Err(SamplerError::invalid(format!(
            "range [{}, {}] covers {} values, at most {} are supported",
            config.min,
            config.max,
            config.span(),
            MAX_SPAN
        )));
    }

    Ok(())
}

/// Validate the bias center lies within the range
fn validate_center(config: &SamplerConfig) -> Result<()> {
    if config.center < config.min || config.center > config.max {
        return Err(SamplerError::invalid(format!(
            "center ({}) must be within [{}, {}]",
            config.center, config.min, config.max
        )));
    }

    Ok(())
}

/// Validate bias strength percentage
fn validate_strength(strength: u32) -> Result<()> {
    if strength > 100 {
        return Err(SamplerError::invalid(format!(
            "strength must be between 0 and 100, got {}",
            strength
        )));
    }

    Ok(())
}

/// Validate discretization resolution
fn validate_granularity(granularity: u32) -> Result<()> {
    if !(MIN_GRANULARITY..=MAX_GRANULARITY).contains(&granularity) {
        return Err(SamplerError::invalid(format!(
            "granularity must be between {} and {}, got {}",
            MIN_GRANULARITY, MAX_GRANULARITY, granularity
        )));
    }

    Ok(())
}
