//! Run outcome consumed by reporters.

use std::path::PathBuf;

use fencepost_core::SnippetId;

use crate::pipeline::ValidationContext;

/// What capture mode did to the baseline file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineUpdate {
    /// Rewritten with `entries` failing snippets.
    Written { path: PathBuf, entries: usize },
    /// Nothing failed, so no baseline is needed.
    Removed { path: PathBuf },
}

/// A snippet that did not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub id: SnippetId,
    pub class_name: String,
    pub errors: Vec<String>,
}

/// Counts and failures of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Language display name, e.g. "Kotlin"
    pub language: String,
    /// Snippets compiled or taken from the cache (baselined ones excluded)
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Snippets dropped by the baseline
    pub skipped: usize,
    /// Results taken from the cache
    pub cached: usize,
    /// Sorted by source file, then index
    pub failures: Vec<Failure>,
    pub baseline: Option<BaselineUpdate>,
}

impl ValidationSummary {
    pub fn from_context(ctx: &ValidationContext) -> Self {
        let mut failures: Vec<Failure> = ctx
            .failures()
            .map(|outcome| Failure {
                id: outcome.id.clone(),
                class_name: outcome.class_name.clone(),
                errors: outcome.errors.clone(),
            })
            .collect();
        failures.sort_by(|a, b| a.id.cmp(&b.id));

        let total = ctx.outcomes.len();
        Self {
            language: ctx.plugin.name().to_string(),
            total,
            passed: total - failures.len(),
            failed: failures.len(),
            skipped: ctx.skipped,
            cached: ctx.outcomes.iter().filter(|o| o.cached).count(),
            failures,
            baseline: ctx.baseline.clone(),
        }
    }

    /// True when no considered snippet failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 0 when every non-baselined snippet compiled, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}
