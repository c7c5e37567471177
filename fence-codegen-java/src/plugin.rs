use fencepost_codegen::language::{CompilerConvention, LanguagePlugin};
use fencepost_core::Snippet;
use fencepost_manifest::{Language, LanguageSettings};

use crate::{JAVA_COMPILER, wrap_java};

/// Validates ```` ```java ```` snippets.
#[derive(Debug, Clone)]
pub struct JavaPlugin {
    settings: LanguageSettings,
}

impl JavaPlugin {
    pub fn new(settings: LanguageSettings) -> Self {
        Self { settings }
    }
}

impl Default for JavaPlugin {
    fn default() -> Self {
        Self::new(LanguageSettings::defaults(Language::Java))
    }
}

impl LanguagePlugin for JavaPlugin {
    fn language(&self) -> Language {
        Language::Java
    }

    fn settings(&self) -> &LanguageSettings {
        &self.settings
    }

    fn compiler(&self) -> &CompilerConvention {
        &JAVA_COMPILER
    }

    fn wrap(&self, class_name: &str, snippet: &Snippet) -> String {
        wrap_java(&self.settings, class_name, snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_identity() {
        let plugin = JavaPlugin::default();
        assert_eq!(plugin.name(), "Java");
        assert_eq!(plugin.tag(), "java");
        assert_eq!(plugin.file_extension(), "java");
        assert_eq!(
            plugin.class_name(&Snippet::new("docs/get-started.mdx", 3, "x")),
            "Snippet_java_docs_get_started_mdx_003"
        );
    }

    #[test]
    fn test_fence_ignores_other_languages() {
        let fence = JavaPlugin::default().fence();
        assert!(fence.is_match("```java\nint x;\n```"));
        assert!(!fence.is_match("```javascript\nlet x;\n```"));
    }
}
