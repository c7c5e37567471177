use clap::Args;
use eyre::Result;
use fencepost_manifest::Language;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Snippet language (java or kotlin)
    pub language: Language,
}

impl CleanCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let fence_toml = global.open_manifest();
        let report = ops::clean(fence_toml.manifest(), &fence_toml.root(), self.language)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
