use std::{num::NonZeroUsize, process::ExitCode};

use clap::Args;
use eyre::{Result, eyre};
use fencepost_codegen::pipeline::Mode;
use fencepost_core::SdkVersion;
use fencepost_manifest::Language;

use super::{GlobalArgs, UnwrapOrExit};
use crate::{
    ops::{self, validate::ValidateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ValidateCommand {
    /// Snippet language (java or kotlin)
    pub language: Language,

    /// Discard the compilation cache before compiling
    #[arg(long)]
    pub clean: bool,

    /// Compile everything and record the failures as the new baseline
    #[arg(long)]
    pub baseline: bool,

    /// SDK version to compile against, overriding fence.toml
    #[arg(long, value_name = "VERSION")]
    pub sdk_version: Option<String>,

    /// Maximum number of concurrent compiler processes
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,
}

impl ValidateCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<ExitCode> {
        let fence_toml = global.open_manifest();
        let manifest = fence_toml.manifest();
        let root = fence_toml.root();

        let sdk_version: SdkVersion = match &self.sdk_version {
            Some(version) => version.parse().map_err(|e: String| eyre!(e))?,
            None => manifest.sdk.resolve(&root).unwrap_or_exit(),
        };

        let report = ops::validate(
            manifest,
            &root,
            ValidateOptions {
                language: self.language,
                mode: if self.baseline {
                    Mode::Capture
                } else {
                    Mode::Normal
                },
                clean_cache: self.clean,
                sdk_version,
                jobs: self.jobs.map(NonZeroUsize::get),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(ExitCode::from(report.exit_code() as u8))
    }
}
