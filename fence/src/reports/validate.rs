//! Validate command report.

use fencepost_codegen::summary::{BaselineUpdate, ValidationSummary};

use super::output::{Output, Report};

/// Result of one validation run, ready to render.
#[derive(Debug)]
pub struct ValidateReport {
    pub summary: ValidationSummary,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
}

impl ValidateReport {
    /// 0 when every considered snippet compiled, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        self.summary.exit_code()
    }

    /// `N snippets  |  P passed  |  F failed`, plus skipped and cached
    /// counts when there are any.
    pub fn summary_line(&self) -> String {
        let s = &self.summary;
        let mut line = format!(
            "{} snippets  |  {} passed  |  {} failed",
            s.total, s.passed, s.failed
        );
        if s.skipped > 0 {
            line.push_str(&format!("  |  {} skipped (baseline)", s.skipped));
        }
        if s.cached > 0 {
            line.push_str(&format!("  |  {} cached", s.cached));
        }
        line
    }
}

impl Report for ValidateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.banner(&format!("{} Snippet Validation", self.summary.language));
        out.line(&self.summary_line());
        out.newline();

        for failure in &self.summary.failures {
            out.line(&format!("[FAIL] {}", failure.id));
            for error in &failure.errors {
                out.line(error);
            }
            out.newline();
        }

        match &self.summary.baseline {
            Some(BaselineUpdate::Written { path, entries }) => {
                out.line(&format!(
                    "Baseline written to {} ({} snippet{})",
                    path.display(),
                    entries,
                    if *entries == 1 { "" } else { "s" }
                ));
                out.newline();
            }
            Some(BaselineUpdate::Removed { path }) => {
                out.line(&format!(
                    "No failures, baseline {} removed",
                    path.display()
                ));
                out.newline();
            }
            None => {}
        }

        if self.summary.is_success() {
            out.line("[PASS] All snippets compiled successfully.");
        } else {
            out.line(&self.summary_line());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use fencepost_codegen::summary::Failure;
    use fencepost_core::SnippetId;

    use super::*;
    use crate::reports::output::BufferOutput;

    fn summary() -> ValidationSummary {
        ValidationSummary {
            language: "Kotlin".to_string(),
            total: 3,
            passed: 2,
            failed: 1,
            skipped: 4,
            cached: 0,
            failures: vec![Failure {
                id: SnippetId {
                    file: "docs/a.md".to_string(),
                    index: 1,
                },
                class_name: "Snippet_kotlin_docs_a_md_001".to_string(),
                errors: vec!["  line 12: unresolved reference: foo".to_string()],
            }],
            baseline: None,
        }
    }

    fn render(report: &ValidateReport) -> String {
        let mut out = BufferOutput::default();
        report.render(&mut out);
        out.text
    }

    #[test]
    fn test_render_failures() {
        let report = ValidateReport {
            summary: summary(),
            warnings: Vec::new(),
        };
        insta::assert_snapshot!(render(&report), @r"
        ============================================================
        Kotlin Snippet Validation
        ============================================================
        3 snippets  |  2 passed  |  1 failed  |  4 skipped (baseline)

        [FAIL] docs/a.md  (snippet 1)
          line 12: unresolved reference: foo

        3 snippets  |  2 passed  |  1 failed  |  4 skipped (baseline)
        ");
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_render_pass_with_cache() {
        let report = ValidateReport {
            summary: ValidationSummary {
                language: "Java".to_string(),
                total: 2,
                passed: 2,
                failed: 0,
                skipped: 0,
                cached: 2,
                failures: Vec::new(),
                baseline: None,
            },
            warnings: vec!["corrupt cache ignored".to_string()],
        };
        insta::assert_snapshot!(render(&report), @r"
        warning: corrupt cache ignored
        ============================================================
        Java Snippet Validation
        ============================================================
        2 snippets  |  2 passed  |  0 failed  |  2 cached

        [PASS] All snippets compiled successfully.
        ");
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_render_capture_notes() {
        let written = ValidateReport {
            summary: ValidationSummary {
                skipped: 0,
                baseline: Some(BaselineUpdate::Written {
                    path: PathBuf::from("validation/baselines/baseline-kotlin.json"),
                    entries: 1,
                }),
                ..summary()
            },
            warnings: Vec::new(),
        };
        assert!(render(&written).contains(
            "Baseline written to validation/baselines/baseline-kotlin.json (1 snippet)\n"
        ));

        let removed = ValidateReport {
            summary: ValidationSummary {
                total: 1,
                passed: 1,
                failed: 0,
                skipped: 0,
                failures: Vec::new(),
                baseline: Some(BaselineUpdate::Removed {
                    path: PathBuf::from("baseline-kotlin.json"),
                }),
                ..summary()
            },
            warnings: Vec::new(),
        };
        let text = render(&removed);
        assert!(text.contains("No failures, baseline baseline-kotlin.json removed\n"));
        assert!(text.ends_with("[PASS] All snippets compiled successfully.\n"));
    }
}
