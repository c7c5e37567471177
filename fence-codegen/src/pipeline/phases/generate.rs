//! Generate phase - wraps snippets into compilation units.

use eyre::Result;
use fencepost_core::{GeneratedFile, remove_dir_if_exists, remove_files_with_extension};
use tracing::{debug, info, warn};

use crate::{
    pipeline::{Diagnostic, Phase, ValidationContext},
    unit::{ClassNames, GeneratedUnit, allocate_class_names},
};

/// Phase that writes one source file per snippet.
///
/// Stale sources of this language and its compiled classes are removed
/// first, so the output directories only hold this run's units.
pub struct GeneratePhase;

impl Phase for GeneratePhase {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn run(&self, ctx: &mut ValidationContext) -> Result<()> {
        let generated_dir = ctx.options.paths.generated_dir.clone();
        let removed = remove_files_with_extension(&generated_dir, ctx.plugin.file_extension())?;
        if remove_dir_if_exists(&ctx.options.paths.classes_dir)? {
            debug!(dir = %ctx.options.paths.classes_dir.display(), "removed compiled classes");
        }
        debug!(removed, "removed stale sources");

        let ClassNames { names, collisions } =
            allocate_class_names(ctx.plugin.as_ref(), &ctx.snippets);
        for name in collisions {
            warn!(class = %name, "class name collision, appending path digests");
            ctx.add_diagnostic(
                Diagnostic::warning(
                    self.name(),
                    "several documents map to the same class name; a path digest was appended",
                )
                .at(name),
            );
        }

        let units: Vec<GeneratedUnit> = ctx
            .snippets
            .iter()
            .cloned()
            .zip(names)
            .map(|(snippet, class_name)| {
                GeneratedUnit::new(ctx.plugin.as_ref(), snippet, class_name)
            })
            .collect();

        for unit in &units {
            unit.write(&generated_dir)?;
        }
        info!(
            units = units.len(),
            dir = %generated_dir.display(),
            "generated sources"
        );

        ctx.units = units;
        Ok(())
    }
}
