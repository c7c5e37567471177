//! Pipeline orchestrator.

use eyre::Result;

use super::{
    Hook, Phase, ValidationContext,
    phases::{BaselineCapturePhase, BaselineFilterPhase, CompilePhase, ExtractPhase, GeneratePhase},
};

/// The validation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (extract, baseline-filter,
/// generate, compile, baseline-capture) followed by any added phases,
/// calling hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .hook(TimingHook::new())
///     .phase(MyReportPhase);
///
/// let ctx = pipeline.run(ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    hooks: Vec<Box<dyn Hook>>,
}

impl Pipeline {
    /// Create a pipeline with no extra phases or hooks.
    ///
    /// The built-in phases always run first.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a hook to receive phase lifecycle callbacks.
    pub fn hook(mut self, hook: impl Hook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Names of every phase this pipeline runs, in order.
    #[cfg(test)]
    fn phase_names(&self) -> Vec<&'static str> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.name())
            .collect()
    }

    /// Run the pipeline over `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally (unreadable docs,
    /// classpath or base type failure, a compiler that cannot be launched).
    /// Nothing is persisted after such a failure.
    pub fn run(&self, mut ctx: ValidationContext) -> Result<ValidationContext> {
        let builtin_phases = Self::builtin_phases();

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(ExtractPhase),
            Box::new(BaselineFilterPhase),
            Box::new(GeneratePhase),
            Box::new(CompilePhase),
            Box::new(BaselineCapturePhase),
        ]
    }

    /// Run a single phase with hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut ValidationContext) -> Result<()> {
        let phase_name = phase.name();

        for hook in &self.hooks {
            hook.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for hook in &self.hooks {
            hook.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    struct CountingHook {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingHook {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Hook for CountingHook {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut ValidationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut ValidationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordPhase(Arc<Mutex<Vec<usize>>>);

    impl Phase for RecordPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn run(&self, ctx: &mut ValidationContext) -> Result<()> {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(ctx.outcomes.len());
            }
            Ok(())
        }
    }

    #[test]
    fn test_phase_order() {
        let pipeline = Pipeline::new().phase(RecordPhase(Arc::default()));
        assert_eq!(
            pipeline.phase_names(),
            vec![
                "extract",
                "baseline-filter",
                "generate",
                "compile",
                "baseline-capture",
                "record",
            ]
        );
    }

    #[cfg(unix)]
    mod run {
        use super::*;
        use crate::testing::Workspace;

        #[test]
        fn test_pipeline_hooks_and_custom_phase() {
            let workspace = Workspace::new().unwrap();
            workspace.doc("docs/a.md", "```java\nint x = 1;\n```\n").unwrap();
            let (hook, before_count, after_count) = CountingHook::new();
            let seen = Arc::new(Mutex::new(Vec::new()));

            let pipeline = Pipeline::new()
                .hook(hook)
                .phase(RecordPhase(seen.clone()));
            let ctx = pipeline.run(workspace.context().unwrap()).unwrap();

            // 5 built-in phases + 1 custom = 6 before + 6 after hooks
            assert_eq!(before_count.load(Ordering::SeqCst), 6);
            assert_eq!(after_count.load(Ordering::SeqCst), 6);
            assert_eq!(*seen.lock().unwrap(), vec![1]);
            assert_eq!(ctx.outcomes.len(), 1);
        }
    }
}
