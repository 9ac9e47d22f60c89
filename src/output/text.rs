//! Human-readable text output
//!
//! One `value: figure` line per range value, ascending by value, joined with
//! `\n` and no trailing newline.

use crate::config::SamplerConfig;
use crate::distribution::{self, BucketModel};
use crate::Result;
use std::collections::BTreeMap;

/// Exact distribution of `config` as text
///
/// Each line is `"{value}: {percentage}"` with the percentage printed to three
/// decimal places and thousands separators, e.g. `7: 27.000`.
pub fn distribution_as_text(config: &SamplerConfig) -> Result<String> {
    Ok(format_distribution(&BucketModel::build(config)?.percentages()))
}

/// Tally of `times` draws from `config` as text
///
/// Each line is `"{value}: {count}"`; every value in `[min, max]` appears.
pub fn draw_many_as_text(config: &SamplerConfig, times: u64) -> Result<String> {
    Ok(format_tally(&distribution::draw_many(config, times)?))
}

/// Render an exact distribution table
pub fn format_distribution(percentages: &BTreeMap<i64, f64>) -> String {
    percentages
        .iter()
        .map(|(value, percent)| format!("{}: {}", value, format_decimal(*percent, 3)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a tally table
pub fn format_tally(counts: &BTreeMap<i64, u64>) -> String {
    counts
        .iter()
        .map(|(value, count)| format!("{}: {}", value, count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a float with fixed decimals and thousands separators
fn format_decimal(n: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, n);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };

    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{}{}.{}", sign, group_thousands(whole), fraction),
        None => format!("{}{}", sign, group_thousands(unsigned)),
    }
}

/// Insert a comma every three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;

    for c in digits.chars().rev() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}
