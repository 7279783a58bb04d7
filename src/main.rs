use std::io;

use simplelog::{Config, WriteLogger};
use structopt::StructOpt;

use otsdb::cliopt::CliOpt;
use otsdb::output::{LineWriter, Output};
use otsdb::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    WriteLogger::init(opt.log_level(), Config::default(), io::stderr())?;

    let output = Output::new(Box::new(LineWriter::new(io::stdout())), opt.encoder());

    Runner::new(Box::new(io::stdin()), output).run()?;

    Ok(())
}
