use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;

use crate::{cli::Args, count::total::ExponentRange, format::NumberFormat};

#[derive(Debug)]
pub struct Config {
    pub exponents: ExponentRange,
    pub mode: OutputMode,
    pub number_format: NumberFormat,
    pub max_bar_width: u32,
    pub no_errors: bool,
    pub verbose: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }

    /// Default `tracing` filter when `INCDEC_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Total,
    Breakdown,
    Chart,
}
