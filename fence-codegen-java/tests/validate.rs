//! End-to-end validation of Java snippets against a scripted compiler.
//!
//! The fake compiler fails any source containing `BROKEN`, so these tests
//! exercise extraction, wrapping, caching and the baseline without a JDK.

#![cfg(unix)]

use fencepost_codegen::{
    pipeline::{Mode, Pipeline, ValidationContext},
    summary::ValidationSummary,
    testing::Workspace,
};
use fencepost_codegen_java::JavaPlugin;
use fencepost_manifest::Language;

fn validate(workspace: &Workspace, mode: Mode) -> ValidationContext {
    let options = workspace
        .options(Language::Java)
        .expect("options")
        .mode(mode);
    let ctx = workspace.context_with(JavaPlugin::default(), options);
    Pipeline::new().run(ctx).expect("pipeline should succeed")
}

#[test]
fn test_valid_snippet_passes() {
    let workspace = Workspace::new().unwrap();
    workspace
        .doc(
            "docs/guide.md",
            "Intro\n\n```java\nList<String> names = new ArrayList<>();\n```\n",
        )
        .unwrap();

    let ctx = validate(&workspace, Mode::Normal);
    let summary = ValidationSummary::from_context(&ctx);

    assert_eq!(summary.total, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.exit_code(), 0);

    let unit = workspace
        .read("validation/generated/Snippet_java_docs_guide_md_000.java")
        .unwrap();
    assert!(unit.contains("extends ValidationBaseJava {"));
    assert!(unit.contains("        List<String> names = new ArrayList<>();\n"));
}

#[test]
fn test_syntax_error_fails() {
    let workspace = Workspace::new().unwrap();
    workspace
        .doc("docs/guide.md", "```java\nBROKEN int x = ;\n```\n")
        .unwrap();

    let summary = ValidationSummary::from_context(&validate(&workspace, Mode::Normal));

    assert_eq!(summary.failed, 1);
    assert!(!summary.failures[0].errors.is_empty());
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_captured_failure_is_skipped() {
    let workspace = Workspace::new().unwrap();
    workspace
        .doc("docs/guide.md", "```java\nBROKEN int x = ;\n```\n")
        .unwrap();

    let captured = ValidationSummary::from_context(&validate(&workspace, Mode::Capture));
    assert_eq!(captured.failed, 1);
    let baseline = workspace
        .read("validation/baselines/baseline-java.json")
        .unwrap();
    assert!(baseline.contains("\"file\": \"docs/guide.md\""));
    assert!(baseline.contains("\"snippet\": 0"));

    let summary = ValidationSummary::from_context(&validate(&workspace, Mode::Normal));
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_cached_pass_skips_compiler() {
    let workspace = Workspace::new().unwrap();
    workspace
        .doc("docs/a.md", "```java\nint x = 1;\n```\n")
        .unwrap();
    workspace
        .doc("docs/b.mdx", "```java\nint y = 2;\n```\n")
        .unwrap();

    validate(&workspace, Mode::Normal);
    let first = workspace.compiler().invocations();
    assert_eq!(first.len(), 3);

    let summary = ValidationSummary::from_context(&validate(&workspace, Mode::Normal));

    assert_eq!(summary.cached, 2);
    assert_eq!(summary.passed, 2);
    assert_eq!(workspace.compiler().invocations(), first);
}

#[test]
fn test_placeholder_blocks_are_ignored() {
    let workspace = Workspace::new().unwrap();
    workspace
        .doc(
            "docs/a.md",
            "```java\n...\n```\n\n```java\n# import java.util.Map;\nMap<String, String> m = null;\n```\n",
        )
        .unwrap();

    let ctx = validate(&workspace, Mode::Normal);

    assert_eq!(ctx.units.len(), 1);
    assert_eq!(ctx.units[0].class_name, "Snippet_java_docs_a_md_000");
    assert!(ctx.units[0].source_text.contains("import java.util.Map;\n\n// Source"));
}
