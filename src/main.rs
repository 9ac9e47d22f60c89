//! rangebias CLI entry point

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rangebias::config::cli::{Cli, OutputFormat};
use rangebias::output::json::RunReport;
use rangebias::output::text::{format_distribution, format_tally};
use rangebias::WeightedRangeSampler;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let config = cli
        .sampler_config()
        .context("Configuration validation failed")?;
    debug!(%config, "configuration validated");

    let rng = match cli.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    let mut sampler = WeightedRangeSampler::with_rng(config, rng)
        .context("Failed to create sampler")?;

    let exact = cli.report.includes_exact().then(|| sampler.distribution());
    let sampled = cli
        .report
        .includes_sampled()
        .then(|| sampler.draw_many(cli.times));

    match cli.format {
        OutputFormat::Text => {
            println!("rangebias v{}", env!("CARGO_PKG_VERSION"));
            println!("{}", config);

            if let Some(percentages) = &exact {
                println!();
                println!("Exact distribution (%):");
                println!("{}", format_distribution(percentages));
            }

            if let Some(counts) = &sampled {
                println!();
                println!("Sampled distribution ({} draws):", cli.times);
                println!("{}", format_tally(counts));
            }
        }
        OutputFormat::Json => {
            let mut report = RunReport::new(config);
            if let Some(percentages) = exact {
                report = report.with_exact(percentages);
            }
            if let Some(counts) = sampled {
                report = report.with_sampled(cli.times, counts);
            }
            println!("{}", report.to_json().context("Failed to serialize report")?);
        }
    }

    Ok(())
}

/// Install the fmt subscriber
///
/// Respects `RANGEBIAS_LOG`; defaults to `warn`, or `debug` with `--debug`.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("RANGEBIAS_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
