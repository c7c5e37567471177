//! Kotlin compilation unit synthesis.

use std::sync::LazyLock;

use fencepost_codegen::{
    builder::CodeBuilder,
    source::{Relocated, Scope, normalize_ellipsis, relocate_blocks, split_imports, strip_visibility},
};
use fencepost_core::Snippet;
use fencepost_manifest::LanguageSettings;
use regex::Regex;

/// `object Foo` at column 0, optionally with a visibility modifier.
static OBJECT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:private|internal|public)\s+)?object\s+\w+").expect("Invalid regex")
});

/// `companion object` at column 0, named or not.
static COMPANION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^companion\s+object").expect("Invalid regex"));

/// Local classes and interfaces cannot carry a visibility modifier.
static LOCAL_TYPE_VISIBILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(\s*)(?:public|private|protected|internal)\s+((?:(?:data|enum|sealed|abstract|open|inner)\s+)*(?:class|interface))\b",
    )
    .expect("Invalid regex")
});

/// Where a snippet line starting a declaration has to go, if anywhere.
pub fn classify_declaration(line: &str) -> Option<Scope> {
    if COMPANION_DECL.is_match(line) {
        Some(Scope::Type)
    } else if OBJECT_DECL.is_match(line) {
        Some(Scope::File)
    } else {
        None
    }
}

/// Wrap `snippet` into a compilable class named `class_name`.
///
/// Layout: package, imports, lifted top-level objects, the class with its
/// lifted companion objects, then `fun validate()` holding the rest.
pub fn wrap_kotlin(settings: &LanguageSettings, class_name: &str, snippet: &Snippet) -> String {
    let (hoisted, body) = split_imports(snippet.content());
    let body = normalize_ellipsis(&body);
    let Relocated {
        file_scope,
        type_scope,
        body,
    } = relocate_blocks(&body, classify_declaration);
    let body = strip_visibility(&body, &LOCAL_TYPE_VISIBILITY);

    let imports: Vec<String> = settings
        .imports
        .iter()
        .map(|import| format!("import {}", import))
        .chain(hoisted)
        .collect();

    CodeBuilder::jvm()
        .line(&format!("package {}", settings.package))
        .blank()
        .when(!imports.is_empty(), |b| {
            b.each(&imports, |b, import| b.line(import)).blank()
        })
        .each(&file_scope, |b, block| b.lines(block).blank())
        .line(&format!(
            "// Source: {}, snippet {}",
            snippet.source_file(),
            snippet.index()
        ))
        .line("@Suppress(\"all\")")
        .block_with_close(
            &format!("class {} : {}() {{", class_name, settings.base_class),
            "}",
            |b| {
                b.each(&type_scope, |b, block| b.lines(block).blank())
                    .block_with_close("fun validate() {", "}", |b| b.lines(&body))
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use fencepost_manifest::Language;

    use super::*;

    fn wrap(content: &str) -> String {
        let settings = LanguageSettings {
            package: "com.example.validation".into(),
            ..LanguageSettings::defaults(Language::Kotlin)
        };
        let snippet = Snippet::new("docs/scan.md", 0, content);
        wrap_kotlin(&settings, "Snippet_kotlin_docs_scan_md_000", &snippet)
    }

    #[test]
    fn test_classify_declaration() {
        assert_eq!(classify_declaration("object Config {"), Some(Scope::File));
        assert_eq!(classify_declaration("private object Keys"), Some(Scope::File));
        assert_eq!(classify_declaration("companion object {"), Some(Scope::Type));
        assert_eq!(classify_declaration("companion object Factory {"), Some(Scope::Type));
        assert_eq!(classify_declaration("    object Nested {"), None);
        assert_eq!(classify_declaration("val o = object : Runnable {"), None);
        assert_eq!(classify_declaration("objectCount += 1"), None);
    }

    #[test]
    fn test_wrap_simple_body() {
        insta::assert_snapshot!(wrap("import com.example.sdk.Camera\nval camera = Camera.getDefault()\n..."), @r#"
        package com.example.validation

        import com.example.sdk.Camera

        // Source: docs/scan.md, snippet 0
        @Suppress("all")
        class Snippet_kotlin_docs_scan_md_000 : ValidationBase() {
            fun validate() {
                val camera = Camera.getDefault()
                // ...
            }
        }
        "#);
    }

    #[test]
    fn test_wrap_relocates_objects() {
        let content = "\
object Settings {
    const val KEY = \"abc\"
}

companion object {
    fun create() = Settings.KEY
}

println(Settings.KEY)";
        insta::assert_snapshot!(wrap(content), @r#"
        package com.example.validation

        object Settings {
            const val KEY = "abc"
        }

        // Source: docs/scan.md, snippet 0
        @Suppress("all")
        class Snippet_kotlin_docs_scan_md_000 : ValidationBase() {
            companion object {
                fun create() = Settings.KEY
            }

            fun validate() {


                println(Settings.KEY)
            }
        }
        "#);
    }

    #[test]
    fn test_local_class_visibility_stripped() {
        let source = wrap("private data class Point(val x: Int)\nval p = Point(1)");
        assert!(source.contains("        data class Point(val x: Int)\n"));
        assert!(!source.contains("private data class"));
    }

    #[test]
    fn test_one_line_object() {
        let source = wrap("object Empty\nval e = Empty");
        assert!(source.starts_with("package com.example.validation\n\nobject Empty\n\n// Source"));
        assert!(source.contains("        val e = Empty\n"));
    }
}
