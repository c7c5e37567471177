//! Language plugin capability interface.

use std::path::Path;

use fencepost_core::{Snippet, slugify};
use fencepost_manifest::{Language, LanguagePaths, LanguageSettings, PathsConfig};
use regex::Regex;

use super::CompilerConvention;

/// Trait for language-specific snippet handling.
///
/// Implement this trait to add support for validating snippets of a new
/// language. The pipeline depends only on this interface.
pub trait LanguagePlugin: Send + Sync {
    /// Which language this plugin handles
    fn language(&self) -> Language;

    /// Package, base type, imports and compiler override
    fn settings(&self) -> &LanguageSettings;

    /// How this language's compiler is found, invoked and read
    fn compiler(&self) -> &CompilerConvention;

    /// Turn a snippet into a complete compilation unit named `class_name`.
    fn wrap(&self, class_name: &str, snippet: &Snippet) -> String;

    /// Human-readable name, e.g. "Kotlin"
    fn name(&self) -> &'static str {
        self.language().display_name()
    }

    /// Tag used in code fences and class names, e.g. "kotlin"
    fn tag(&self) -> &'static str {
        self.language().as_str()
    }

    /// File extension for generated source files (e.g., "java", "kt")
    fn file_extension(&self) -> &'static str {
        self.language().extension()
    }

    /// Regex matching one fenced block of this language; group 1 is the body.
    fn fence(&self) -> Regex {
        fence_regex(self.tag())
    }

    /// Name of the generated type for `snippet`.
    ///
    /// A pure function of the snippet's path, index and the language tag.
    fn class_name(&self, snippet: &Snippet) -> String {
        snippet_class_name(self.tag(), snippet)
    }

    /// Generated, compiled, cache and baseline locations for this language.
    fn paths(&self, config: &PathsConfig, root: &Path) -> LanguagePaths {
        config.resolve(root, self.language())
    }
}

/// Fence regex for `tag`: the tag directly after the backticks, optional
/// trailing whitespace, a newline, then the lazily matched body.
pub fn fence_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)```{}\s*\n(.*?)```", regex::escape(tag))).expect("Invalid regex")
}

/// `Snippet_<tag>_<slug of path>_<index padded to 3>`.
pub fn snippet_class_name(tag: &str, snippet: &Snippet) -> String {
    format!(
        "Snippet_{}_{}_{:03}",
        tag,
        slugify(snippet.source_file()),
        snippet.index()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        let snippet = Snippet::new("docs/sdks/android/get-started.md", 7, "x");
        assert_eq!(
            snippet_class_name("kotlin", &snippet),
            "Snippet_kotlin_docs_sdks_android_get_started_md_007"
        );
    }

    #[test]
    fn test_class_name_wide_index() {
        let snippet = Snippet::new("a.md", 1234, "x");
        assert_eq!(snippet_class_name("java", &snippet), "Snippet_java_a_md_1234");
    }

    #[test]
    fn test_fence_regex() {
        let fence = fence_regex("java");
        let text = "```java\nint x = 1;\n```\n```javascript\nlet y;\n```\n```java  \nfoo();\n```";
        let bodies: Vec<&str> = fence
            .captures_iter(text)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(bodies, vec!["int x = 1;\n", "foo();\n"]);
    }

    #[test]
    fn test_fence_requires_newline_after_tag() {
        let fence = fence_regex("kotlin");
        assert!(!fence.is_match("```kotlin title=\"x\"\nval a = 1\n```"));
    }
}
