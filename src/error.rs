//! Error types for sampler configuration

use thiserror::Error;

/// Errors raised by rangebias
///
/// There is a single kind: the configuration handed to the sampler is not
/// usable. Sampling is pure computation with no I/O, so nothing else can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SamplerError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
