//! Extract phase - finds the snippets to validate.

use eyre::{Result, bail};
use tracing::info;

use crate::{
    extract::Extractor,
    pipeline::{Diagnostic, Phase, ValidationContext},
};

/// Phase that collects the language's fenced snippets from the docs.
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn run(&self, ctx: &mut ValidationContext) -> Result<()> {
        // A mistyped root would otherwise pass with nothing validated.
        let missing: Vec<String> = ctx
            .options
            .docs
            .iter()
            .filter(|docs| !ctx.options.root.join(docs).is_dir())
            .map(|docs| docs.display().to_string())
            .collect();
        for docs in &missing {
            ctx.add_diagnostic(
                Diagnostic::error(self.name(), "documentation root not found").at(docs.as_str()),
            );
        }
        if ctx.has_errors() {
            bail!(
                "extraction failed with {} error(s): documentation root not found: {}",
                ctx.error_count(),
                missing.join(", ")
            );
        }

        let snippets = Extractor::new(ctx.plugin.fence(), &ctx.options.root)
            .roots(&ctx.options.docs)
            .extensions(ctx.options.extensions.iter().cloned())
            .extract()?;

        let files = snippets
            .iter()
            .map(|s| s.source_file())
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        info!(
            language = ctx.plugin.name(),
            snippets = snippets.len(),
            files,
            "extracted snippets"
        );

        if snippets.is_empty() {
            let message = format!("no {} snippets found", ctx.plugin.name());
            ctx.add_warning(self.name(), message);
        }
        ctx.snippets = snippets;
        Ok(())
    }
}
