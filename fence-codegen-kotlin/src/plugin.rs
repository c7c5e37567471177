use fencepost_codegen::language::{CompilerConvention, LanguagePlugin};
use fencepost_core::Snippet;
use fencepost_manifest::{Language, LanguageSettings};

use crate::{KOTLIN_COMPILER, wrap_kotlin};

/// Validates ```` ```kotlin ```` snippets.
#[derive(Debug, Clone)]
pub struct KotlinPlugin {
    settings: LanguageSettings,
}

impl KotlinPlugin {
    pub fn new(settings: LanguageSettings) -> Self {
        Self { settings }
    }
}

impl Default for KotlinPlugin {
    fn default() -> Self {
        Self::new(LanguageSettings::defaults(Language::Kotlin))
    }
}

impl LanguagePlugin for KotlinPlugin {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn settings(&self) -> &LanguageSettings {
        &self.settings
    }

    fn compiler(&self) -> &CompilerConvention {
        &KOTLIN_COMPILER
    }

    fn wrap(&self, class_name: &str, snippet: &Snippet) -> String {
        wrap_kotlin(&self.settings, class_name, snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_identity() {
        let plugin = KotlinPlugin::default();
        assert_eq!(plugin.name(), "Kotlin");
        assert_eq!(plugin.file_extension(), "kt");
        assert_eq!(
            plugin.class_name(&Snippet::new("docs/sdks/android/scan.md", 12, "x")),
            "Snippet_kotlin_docs_sdks_android_scan_md_012"
        );
    }

    #[test]
    fn test_custom_settings() {
        let settings = LanguageSettings {
            base_class: "SnippetBase".into(),
            ..LanguageSettings::defaults(Language::Kotlin)
        };
        let source = KotlinPlugin::new(settings).wrap("A", &Snippet::new("a.md", 0, "f()"));
        assert!(source.contains("class A : SnippetBase() {"));
    }
}
