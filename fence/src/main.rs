mod commands;
mod language;
mod logging;
mod ops;
mod reports;

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbosity());
    cli.run()
}
