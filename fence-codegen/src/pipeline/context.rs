//! Validation context passed through pipeline phases.

use std::path::PathBuf;

use fencepost_core::{ContentHash, SdkVersion, Snippet, SnippetId};
use fencepost_manifest::LanguagePaths;

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    compile::{ClasspathResolver, Toolchain},
    language::LanguagePlugin,
    summary::BaselineUpdate,
    unit::GeneratedUnit,
};

/// How a run treats the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Skip baselined snippets and report the rest.
    #[default]
    Normal,
    /// Ignore the baseline, compile everything, then rewrite the baseline
    /// with the failures.
    Capture,
}

/// Run parameters for one language.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Repository root; snippet paths are relative to it
    pub root: PathBuf,
    /// Documentation roots, relative to `root`
    pub docs: Vec<PathBuf>,
    /// Document extensions without the dot
    pub extensions: Vec<String>,
    pub paths: LanguagePaths,
    pub sdk_version: SdkVersion,
    pub mode: Mode,
    /// Discard the cache before compiling
    pub clean_cache: bool,
    /// Upper bound on concurrent compiler processes
    pub jobs: Option<usize>,
}

impl ValidateOptions {
    pub fn new(root: impl Into<PathBuf>, paths: LanguagePaths, sdk_version: SdkVersion) -> Self {
        Self {
            root: root.into(),
            docs: Vec::new(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            paths,
            sdk_version,
            mode: Mode::Normal,
            clean_cache: false,
            jobs: None,
        }
    }

    pub fn docs<I, P>(mut self, docs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.docs = docs.into_iter().map(Into::into).collect();
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn clean_cache(mut self, clean: bool) -> Self {
        self.clean_cache = clean;
        self
    }

    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }
}

/// Result for one generated unit, fresh or from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub id: SnippetId,
    pub class_name: String,
    pub hash: ContentHash,
    pub errors: Vec<String>,
    /// Taken from the cache without invoking the compiler
    pub cached: bool,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Context passed through all pipeline phases.
///
/// This struct carries the state of a run through each phase, accumulating
/// results and diagnostics along the way.
pub struct ValidationContext {
    /// The language being validated.
    pub plugin: Box<dyn LanguagePlugin>,
    /// Classpath source for the SDK version.
    pub classpath: Box<dyn ClasspathResolver>,
    /// Compiler program, discovered once per run.
    pub toolchain: Toolchain,
    pub options: ValidateOptions,
    /// Snippets still under consideration (populated by ExtractPhase,
    /// narrowed by BaselineFilterPhase).
    pub snippets: Vec<Snippet>,
    /// Snippets dropped because the baseline accepts them.
    pub skipped: usize,
    /// Generated units (populated by GeneratePhase).
    pub units: Vec<GeneratedUnit>,
    /// One outcome per unit, in unit order (populated by CompilePhase).
    pub outcomes: Vec<Outcome>,
    /// What capture mode did to the baseline file.
    pub baseline: Option<BaselineUpdate>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationContext {
    pub fn new(
        plugin: Box<dyn LanguagePlugin>,
        classpath: Box<dyn ClasspathResolver>,
        toolchain: Toolchain,
        options: ValidateOptions,
    ) -> Self {
        Self {
            plugin,
            classpath,
            toolchain,
            options,
            snippets: Vec::new(),
            skipped: 0,
            units: Vec::new(),
            outcomes: Vec::new(),
            baseline: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Outcomes that did not compile.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}
