//! Pipeline phase trait.

use eyre::Result;

use super::ValidationContext;

/// A phase in the validation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read and
/// modify the validation context.
///
/// Built-in phases:
/// - `ExtractPhase` - finds the language's snippets in the docs
/// - `BaselineFilterPhase` - drops accepted failures (normal mode)
/// - `GeneratePhase` - names, wraps and writes compilation units
/// - `CompilePhase` - consults the cache and compiles the misses
/// - `BaselineCapturePhase` - rewrites the baseline (capture mode)
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and hooks).
    fn name(&self) -> &'static str;

    /// Run this phase on the validation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut ValidationContext) -> Result<()>;
}
