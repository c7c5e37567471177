//! Compile phase - cache lookup and compilation of the misses.

use std::collections::HashMap;

use eyre::Result;
use fencepost_core::remove_file_if_exists;
use tracing::{info, warn};

use crate::{
    cache::CompileCache,
    compile::CompilerDriver,
    pipeline::{Mode, Outcome, Phase, ValidationContext},
    unit::GeneratedUnit,
    StateError,
};

/// Phase that produces one outcome per unit.
///
/// Units whose content hash is cached reuse the stored errors; the rest are
/// compiled. The cache is then rebuilt from this run's units alone, so
/// entries for deleted or edited snippets drop out.
pub struct CompilePhase;

impl Phase for CompilePhase {
    fn name(&self) -> &'static str {
        "compile"
    }

    fn run(&self, ctx: &mut ValidationContext) -> Result<()> {
        let paths = ctx.options.paths.clone();
        let version = ctx.options.sdk_version.clone();

        if (ctx.options.clean_cache || ctx.options.mode == Mode::Capture)
            && remove_file_if_exists(&paths.cache_file)?
        {
            info!(path = %paths.cache_file.display(), "cleaned snippet cache");
        }

        let cache = match CompileCache::try_load(&paths.cache_file, &version) {
            Ok(cache) => cache,
            Err(err) => {
                match &err {
                    StateError::Missing { .. } => {}
                    StateError::VersionMismatch { .. } => {
                        info!(error = %err, "discarding compile cache");
                    }
                    _ => {
                        warn!(error = %err, "ignoring compile cache");
                        ctx.add_warning(self.name(), err.to_string());
                    }
                }
                CompileCache::new()
            }
        };

        let pending: Vec<&GeneratedUnit> = ctx
            .units
            .iter()
            .filter(|unit| cache.get(unit.snippet.hash()).is_none())
            .collect();
        info!(
            cached = ctx.units.len() - pending.len(),
            pending = pending.len(),
            "checked compile cache"
        );

        let driver = CompilerDriver::new(
            *ctx.plugin.compiler(),
            &ctx.toolchain,
            ctx.classpath.as_ref(),
        )?
        .base_source(ctx.options.root.join(&ctx.plugin.settings().base_source))
        .generated_dir(&paths.generated_dir)
        .classes_dir(&paths.classes_dir)
        .jobs(ctx.options.jobs);
        let mut fresh: HashMap<String, Vec<String>> = driver
            .compile(&pending, &version)?
            .into_iter()
            .map(|result| (result.class_name, result.errors))
            .collect();
        let compiled = fresh.len();

        let mut next = CompileCache::new();
        let outcomes: Vec<Outcome> = ctx
            .units
            .iter()
            .map(|unit| {
                let hash = unit.snippet.hash();
                let (errors, cached) = match fresh.remove(&unit.class_name) {
                    Some(errors) => (errors, false),
                    None => (cache.get(hash).map(<[String]>::to_vec).unwrap_or_default(), true),
                };
                next.insert(hash.clone(), errors.clone());
                Outcome {
                    id: unit.snippet.id().clone(),
                    class_name: unit.class_name.clone(),
                    hash: hash.clone(),
                    errors,
                    cached,
                }
            })
            .collect();

        next.save(&paths.cache_file, &version)?;
        info!(
            compiled,
            failed = outcomes.iter().filter(|o| !o.passed()).count(),
            "compilation finished"
        );

        ctx.outcomes = outcomes;
        Ok(())
    }
}
