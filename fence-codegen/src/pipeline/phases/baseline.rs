//! Baseline phases - accepted failures in and out.

use eyre::Result;
use fencepost_core::remove_file_if_exists;
use tracing::{info, warn};

use crate::{
    baseline::{Baseline, BaselineEntry},
    pipeline::{Mode, Phase, ValidationContext},
    summary::BaselineUpdate,
};

/// Phase that drops snippets whose exact triple is baselined.
///
/// Runs in normal mode only; capture mode has to see every failure.
pub struct BaselineFilterPhase;

impl Phase for BaselineFilterPhase {
    fn name(&self) -> &'static str {
        "baseline-filter"
    }

    fn run(&self, ctx: &mut ValidationContext) -> Result<()> {
        if ctx.options.mode == Mode::Capture {
            return Ok(());
        }

        let path = ctx.options.paths.baseline_file.clone();
        let baseline = match Baseline::try_load(&path) {
            Ok(baseline) => baseline,
            Err(err) => {
                if !err.is_missing() {
                    warn!(error = %err, "ignoring baseline");
                    ctx.add_warning(self.name(), err.to_string());
                }
                Baseline::new()
            }
        };
        if baseline.is_empty() {
            return Ok(());
        }

        let before = ctx.snippets.len();
        ctx.snippets.retain(|snippet| !baseline.contains(snippet));
        ctx.skipped = before - ctx.snippets.len();
        if ctx.skipped > 0 {
            info!(skipped = ctx.skipped, "skipped baselined snippets");
        }
        Ok(())
    }
}

/// Phase that rewrites the baseline with exactly this run's failures.
///
/// Runs in capture mode only. With no failures the file is removed.
pub struct BaselineCapturePhase;

impl Phase for BaselineCapturePhase {
    fn name(&self) -> &'static str {
        "baseline-capture"
    }

    fn run(&self, ctx: &mut ValidationContext) -> Result<()> {
        if ctx.options.mode != Mode::Capture {
            return Ok(());
        }

        let path = ctx.options.paths.baseline_file.clone();
        let failing: Baseline = ctx
            .units
            .iter()
            .zip(&ctx.outcomes)
            .filter(|(_, outcome)| !outcome.passed())
            .map(|(unit, _)| BaselineEntry::of(&unit.snippet))
            .collect();

        let update = if failing.is_empty() {
            remove_file_if_exists(&path)?;
            info!(path = %path.display(), "no failures, baseline removed");
            BaselineUpdate::Removed { path }
        } else {
            failing.save(&path)?;
            info!(path = %path.display(), entries = failing.len(), "baseline saved");
            BaselineUpdate::Written {
                path,
                entries: failing.len(),
            }
        };
        ctx.baseline = Some(update);
        Ok(())
    }
}
