use clap::Args;
use eyre::Result;
use fencepost_manifest::Language;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Snippet language (java or kotlin)
    pub language: Language,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let fence_toml = global.open_manifest();
        let report = ops::list(fence_toml.manifest(), &fence_toml.root(), self.language)?;

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
