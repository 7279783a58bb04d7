use std::str::FromStr;

use log::LevelFilter;
use structopt::StructOpt;

use crate::output::{Encoder, HumanReadableEncoder, JsonEncoder};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "otsdb",
    about = "Read OpenTSDB put lines from stdin and print them as metric points"
)]
pub struct CliOpt {
    /// Output format: json or human
    #[structopt(long = "format", short = "f", default_value = "json")]
    pub format: Format,

    /// Log to stderr, repeat for more detail
    #[structopt(long = "verbose", short = "v", parse(from_occurrences))]
    pub verbose: u8,
}

impl CliOpt {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn encoder(&self) -> Box<dyn Encoder> {
        match self.format {
            Format::Json => Box::new(JsonEncoder::new()),
            Format::HumanReadable => Box::new(HumanReadableEncoder::new()),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Json,
    HumanReadable,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" | "j" => Ok(Format::Json),
            "human" | "h" => Ok(Format::HumanReadable),
            _ => Err(format!("unknown output format '{}'", s)),
        }
    }
}
