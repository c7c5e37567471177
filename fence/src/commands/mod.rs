mod clean;
mod completions;
mod list;
mod validate;

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use fencepost_manifest::FenceToml;
use list::ListCommand;
use validate::ValidateCommand;

use crate::logging::Verbosity;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fencepost_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to fence.toml
    #[arg(short, long, global = true, default_value = "fence.toml")]
    pub config: PathBuf,

    /// Log debug events (compiler invocations, phase timings)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Open the manifest, exiting with a rendered diagnostic on failure.
    pub fn open_manifest(&self) -> FenceToml {
        FenceToml::open(&self.config).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "fence")]
#[command(version)]
#[command(about = "Compile-check the code snippets in your documentation")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.global.verbose, self.global.quiet)
    }

    pub fn run(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Validate(cmd) => cmd.run(&self.global),
            Commands::List(cmd) => cmd.run(&self.global).map(|_| ExitCode::SUCCESS),
            Commands::Clean(cmd) => cmd.run(&self.global).map(|_| ExitCode::SUCCESS),
            Commands::Completions(cmd) => cmd.run().map(|_| ExitCode::SUCCESS),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile every snippet of one language and report failures
    Validate(ValidateCommand),

    /// List the snippets of one language without compiling
    List(ListCommand),

    /// Remove generated sources, compiled classes and the cache
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
