//! Validate operation - compile every snippet of one language.

use std::path::Path;

use eyre::{Context, Result};
use fencepost_codegen::{
    compile::{Toolchain, resolver_from_config},
    pipeline::{self, Mode, Pipeline, TimingHook, ValidationContext},
    summary::ValidationSummary,
};
use fencepost_core::SdkVersion;
use fencepost_manifest::{Language, Manifest};
use tracing::info;

use crate::{language, reports::ValidateReport};

/// Options for the validate operation.
pub struct ValidateOptions {
    pub language: Language,
    pub mode: Mode,
    /// Discard the cache before compiling.
    pub clean_cache: bool,
    pub sdk_version: SdkVersion,
    pub jobs: Option<usize>,
}

/// Execute the validate operation.
///
/// Runs the full pipeline for one language under `root` and returns the
/// summary together with any warnings the phases recorded.
pub fn validate(manifest: &Manifest, root: &Path, opts: ValidateOptions) -> Result<ValidateReport> {
    let plugin = language::plugin(manifest, opts.language);
    let paths = plugin.paths(&manifest.paths, root);
    let toolchain = Toolchain::from_env(plugin.compiler(), plugin.settings().compiler.as_deref());
    info!(
        language = plugin.name(),
        sdk = %opts.sdk_version,
        compiler = %toolchain.display(),
        "validating snippets"
    );

    let options = pipeline::ValidateOptions::new(root, paths, opts.sdk_version)
        .docs(manifest.project.docs.get_ref())
        .extensions(manifest.project.extensions.iter().cloned())
        .mode(opts.mode)
        .clean_cache(opts.clean_cache)
        .jobs(opts.jobs);
    let ctx = ValidationContext::new(
        plugin,
        resolver_from_config(&manifest.classpath, root),
        toolchain,
        options,
    );

    let ctx = Pipeline::new()
        .hook(TimingHook::new())
        .run(ctx)
        .wrap_err("Validation failed")?;

    let warnings = ctx
        .warnings()
        .map(|diag| match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        })
        .collect();

    Ok(ValidateReport {
        summary: ValidationSummary::from_context(&ctx),
        warnings,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use fencepost_codegen::testing::Workspace;

    use super::*;
    use crate::ops::fixture;

    fn options(language: Language, mode: Mode) -> ValidateOptions {
        ValidateOptions {
            language,
            mode,
            clean_cache: false,
            sdk_version: "8.2.0".parse().unwrap(),
            jobs: Some(2),
        }
    }

    #[test]
    fn test_validate_reports_failures() {
        let workspace = Workspace::new().unwrap();
        workspace
            .doc(
                "docs/a.md",
                "```kotlin\nval ok = 1\n```\n\n```kotlin\nval no = BROKEN\n```\n",
            )
            .unwrap();
        let manifest = fixture::manifest(&workspace);

        let report = validate(
            &manifest,
            workspace.root(),
            options(Language::Kotlin, Mode::Normal),
        )
        .unwrap();

        assert_eq!(report.summary.language, "Kotlin");
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.exit_code(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_capture_then_validate_passes() {
        let workspace = Workspace::new().unwrap();
        workspace
            .doc("docs/a.md", "```java\nBROKEN();\n```\n")
            .unwrap();
        let manifest = fixture::manifest(&workspace);

        let captured = validate(
            &manifest,
            workspace.root(),
            options(Language::Java, Mode::Capture),
        )
        .unwrap();
        assert!(captured.summary.baseline.is_some());

        let report = validate(
            &manifest,
            workspace.root(),
            options(Language::Java, Mode::Normal),
        )
        .unwrap();
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_missing_docs_is_a_warning() {
        let workspace = Workspace::new().unwrap();
        let manifest = fixture::manifest(&workspace);

        let report = validate(
            &manifest,
            workspace.root(),
            options(Language::Java, Mode::Normal),
        )
        .unwrap();

        assert_eq!(report.summary.total, 0);
        assert_eq!(report.warnings, vec!["no Java snippets found"]);
        assert_eq!(report.exit_code(), 0);
    }
}
