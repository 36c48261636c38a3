use clap::Parser;

use crate::{
    config::{Config, OutputMode},
    count::total::ExponentRange,
    format::NumberFormat,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Exponent x: count numbers below 10^x
    #[arg(allow_negative_numbers = true)]
    pub exponent: i64,

    /// Evaluate every exponent from x up to and including this one
    #[arg(name = "to", long = "to", allow_negative_numbers = true)]
    pub to: Option<i64>,

    #[arg(name = "breakdown", long = "breakdown", short = 'b', conflicts_with = "chart")]
    pub breakdown: bool,
    #[arg(name = "chart", long = "chart", short = 'c', conflicts_with = "breakdown")]
    pub chart: bool,

    #[arg(name = "grouped", long = "grouped", short = 'g', conflicts_with = "sci")]
    pub grouped: bool,
    #[arg(
        name = "sci",
        long = "sci",
        alias = "scientific",
        conflicts_with = "grouped"
    )]
    pub sci: bool,

    #[arg(
        name = "max-bar-width",
        long = "max-bar-width",
        aliases = vec!["bw", "bl", "bs"],
        default_value_t = 50
    )]
    pub max_bar_width: u32,
    #[arg(
        name = "no-errors",
        long = "no-errors",
        aliases = vec!["no-error", "no-errs", "no-err", "noerrors", "noerr"]
    )]
    pub no_errors: bool,

    #[arg(name = "verbose", long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let exponents = match args.to {
            Some(end) if end < args.exponent => {
                anyhow::bail!(
                    "empty exponent range: --to {} is below the starting exponent {}",
                    end,
                    args.exponent
                );
            }
            Some(end) => ExponentRange {
                start: args.exponent,
                end,
            },
            None => ExponentRange::single(args.exponent),
        };

        let mode = if args.breakdown {
            OutputMode::Breakdown
        } else if args.chart {
            OutputMode::Chart
        } else {
            OutputMode::Total
        };

        let number_format = if args.grouped {
            NumberFormat::Grouped
        } else if args.sci {
            NumberFormat::Scientific
        } else {
            NumberFormat::Raw
        };

        if args.max_bar_width == 0 {
            anyhow::bail!("--max-bar-width must be at least 1");
        }

        Ok(Config {
            exponents,
            mode,
            number_format,
            max_bar_width: args.max_bar_width,
            no_errors: args.no_errors,
            verbose: args.verbose,
        })
    }
}
