//! Java compilation unit synthesis.

use std::sync::LazyLock;

use fencepost_codegen::{
    builder::CodeBuilder,
    source::{normalize_ellipsis, split_imports, strip_visibility},
};
use fencepost_core::Snippet;
use fencepost_manifest::LanguageSettings;
use regex::Regex;

/// Local types cannot carry an access modifier inside a method.
static LOCAL_TYPE_VISIBILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\s*)(?:public|private|protected)\s+(class|interface|enum)\b")
        .expect("Invalid regex")
});

/// Wrap `snippet` into a compilable class named `class_name`.
///
/// Imports in the snippet move to file scope after the common ones; the rest
/// becomes the body of `validate()`, indented two levels. Every body line
/// keeps its own line, so compiler line numbers stay stable relative to the
/// body start.
pub fn wrap_java(settings: &LanguageSettings, class_name: &str, snippet: &Snippet) -> String {
    let (hoisted, body) = split_imports(snippet.content());
    let body = normalize_ellipsis(&body);
    let body = strip_visibility(&body, &LOCAL_TYPE_VISIBILITY);

    let imports: Vec<String> = settings
        .imports
        .iter()
        .map(|import| format!("import {};", import))
        .chain(hoisted)
        .collect();

    CodeBuilder::jvm()
        .line(&format!("package {};", settings.package))
        .blank()
        .when(!imports.is_empty(), |b| {
            b.each(&imports, |b, import| b.line(import)).blank()
        })
        .line(&format!(
            "// Source: {}, snippet {}",
            snippet.source_file(),
            snippet.index()
        ))
        .line("@SuppressWarnings(\"all\")")
        .block_with_close(
            &format!("public class {} extends {} {{", class_name, settings.base_class),
            "}",
            |b| {
                b.blank()
                    .block_with_close("void validate() throws Exception {", "}", |b| b.lines(&body))
            },
        )
        .build()
}
