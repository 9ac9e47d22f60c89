//! JSON output formatting
//!
//! Serializes a run (configuration, exact distribution, and optional tally) as
//! a single pretty-printed document. Map keys are range values; JSON object
//! keys are strings, so they appear quoted.

use crate::config::SamplerConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tally of repeated draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSampled {
    pub times: u64,
    pub counts: BTreeMap<i64, u64>,
}

/// Complete report of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub config: SamplerConfig,
    /// Biased region as `[low, high]`
    pub biased_region: (i64, i64),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<BTreeMap<i64, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampled: Option<JsonSampled>,
}

impl RunReport {
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            biased_region: config.biased_region(),
            exact: None,
            sampled: None,
        }
    }

    pub fn with_exact(mut self, percentages: BTreeMap<i64, f64>) -> Self {
        self.exact = Some(percentages);
        self
    }

    pub fn with_sampled(mut self, times: u64, counts: BTreeMap<i64, u64>) -> Self {
        self.sampled = Some(JsonSampled { times, counts });
        self
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
