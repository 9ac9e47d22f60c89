//! rangebias - weighted random integers over a bounded range
//!
//! rangebias draws integers from an inclusive range `[min, max]`, biased toward
//! a center value by a normal-shaped envelope layered on a uniform floor.
//!
//! # Architecture
//!
//! - **Configuration**: an immutable, validated [`SamplerConfig`]
//! - **Bucket model**: integer quotas per value, derived deterministically from
//!   the configuration ([`BucketModel`])
//! - **Sampling**: single draws and tallied repeated draws, with an injectable
//!   [`rand::Rng`] ([`WeightedRangeSampler`], [`distribution`])
//! - **Reporting**: exact probability tables and tallies as text or JSON
//!   ([`output`])

pub mod config;
pub mod distribution;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use config::{configure, SamplerConfig, DEFAULT_GRANULARITY};
pub use distribution::{BucketModel, WeightedRangeSampler};
pub use error::SamplerError;

/// Result type used throughout rangebias
pub type Result<T> = std::result::Result<T, SamplerError>;
