use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use incdec::{
    cli::Args,
    config::{Config, OutputMode},
    count::total::breakdowns_in_range,
    output::{
        chart::print_chart, errors::print_errors, listing::print_listing, summary::print_summary,
    },
    Breakdown,
};

const LOG_ENV: &str = "INCDEC_LOG";

fn main() -> anyhow::Result<()> {
    let config = Config::try_from(Args::parse())?;
    init_tracing(&config);

    if config.exponents.is_single() {
        run_single(&config)
    } else {
        run_range(&config)
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_single(config: &Config) -> anyhow::Result<()> {
    let x = config.exponents.start;

    let start = Instant::now();
    let breakdown = Breakdown::checked(x)
        .with_context(|| format!("cannot count numbers below 10^{x}"))?;
    let took = start.elapsed();

    match config.mode {
        OutputMode::Total => println!("{}", config.number_format.format(&breakdown.total)),
        OutputMode::Breakdown => print_summary(&breakdown, &config.number_format, took),
        OutputMode::Chart => print_chart(
            &[(x, breakdown.total)],
            &config.number_format,
            config.max_bar_width,
        ),
    }

    Ok(())
}

fn run_range(config: &Config) -> anyhow::Result<()> {
    let range = &config.exponents;

    let pb = ProgressBar::new(range.len());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} Counting... [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")?
            .progress_chars("█░ "),
    );

    let mut breakdowns = Vec::new();
    let mut errors = Vec::new();
    let mut last = Instant::now();

    for (x, result) in breakdowns_in_range(range) {
        let took = last.elapsed();
        last = Instant::now();

        match result {
            Ok(breakdown) => breakdowns.push((x, breakdown, took)),
            Err(err) => {
                tracing::debug!(exponent = x, %err, "skipping exponent");
                errors.push(err);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if !errors.is_empty() && !config.no_errors {
        print_errors(&errors);
    }

    if breakdowns.is_empty() {
        anyhow::bail!(
            "no exponent in {}..={} could be evaluated",
            range.start,
            range.end
        );
    }

    match config.mode {
        OutputMode::Breakdown => {
            for (_, breakdown, took) in &breakdowns {
                print_summary(breakdown, &config.number_format, *took);
            }
        }
        OutputMode::Total | OutputMode::Chart => {
            let totals: Vec<_> = breakdowns
                .into_iter()
                .map(|(x, b, _)| (x, b.total))
                .collect();

            if config.mode == OutputMode::Chart {
                print_chart(&totals, &config.number_format, config.max_bar_width);
            } else {
                print_listing(&totals, &config.number_format);
            }
        }
    }

    Ok(())
}
