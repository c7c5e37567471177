//! Pipeline hook trait for extensibility.

use eyre::Result;

use super::ValidationContext;

/// A hook into the validation pipeline.
///
/// Hooks receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the validation context. See
/// [`TimingHook`](super::TimingHook) for an example.
pub trait Hook: Send + Sync {
    /// The name of this hook (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut ValidationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut ValidationContext) -> Result<()> {
        Ok(())
    }
}
