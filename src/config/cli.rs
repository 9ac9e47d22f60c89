//! CLI argument parsing using clap

use super::{configure, SamplerConfig, DEFAULT_GRANULARITY};
use clap::{Parser, ValueEnum};

/// Which report(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Exact probability table computed from the bucket model
    Exact,
    /// Tally of repeated draws
    Sampled,
    /// Both reports (default)
    Both,
}

impl ReportKind {
    pub fn includes_exact(self) -> bool {
        matches!(self, ReportKind::Exact | ReportKind::Both)
    }

    pub fn includes_sampled(self) -> bool {
        matches!(self, ReportKind::Sampled | ReportKind::Both)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `value: figure` line per entry
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// rangebias - weighted random integers over a bounded range
#[derive(Parser, Debug)]
#[command(name = "rangebias")]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Cli {
    // === Range Options ===
    /// Inclusive lower bound
    #[arg(long)]
    pub min: i64,

    /// Inclusive upper bound
    #[arg(long)]
    pub max: i64,

    /// Value to bias toward (must lie within [min, max])
    #[arg(short = 'c', long)]
    pub center: i64,

    // === Bias Options ===
    /// Bias strength in percent (0 = uniform, 100 = maximal bias)
    #[arg(short = 's', long)]
    pub strength: u32,

    /// Half-width of the biased region around the center
    #[arg(short = 'w', long)]
    pub spread: u64,

    /// Discretization resolution (10-100)
    #[arg(short = 'g', long, default_value_t = DEFAULT_GRANULARITY)]
    pub granularity: u32,

    // === Sampling Options ===
    /// Number of draws for the sampled report
    #[arg(short = 'n', long, default_value = "1000")]
    pub times: u64,

    /// Seed for reproducible sampling (entropy-seeded when omitted)
    #[arg(long, env = "RANGEBIAS_SEED")]
    pub seed: Option<u64>,

    // === Output Options ===
    /// Report(s) to print
    #[arg(long, value_enum, default_value = "both")]
    pub report: ReportKind,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build a validated sampler configuration from the arguments
    pub fn sampler_config(&self) -> crate::Result<SamplerConfig> {
        configure(
            self.min,
            self.max,
            self.center,
            self.strength,
            self.spread,
            self.granularity,
        )
    }
}
