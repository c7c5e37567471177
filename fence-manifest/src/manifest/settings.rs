//! Per-language settings with defaults applied.

use std::path::{Path, PathBuf};

use super::{Language, Manifest, PathsConfig};

const DEFAULT_PACKAGE: &str = "com.example.validation";

const DEFAULT_JAVA_IMPORTS: &[&str] = &[
    "androidx.annotation.NonNull",
    "androidx.annotation.Nullable",
    "java.util.ArrayList",
    "java.util.Arrays",
    "java.util.EnumSet",
    "java.util.HashSet",
    "java.util.List",
];

/// Wrapping and compiler settings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSettings {
    pub language: Language,
    /// Package of every generated unit
    pub package: String,
    /// Simple name of the shared validation base type
    pub base_class: String,
    /// Source of the base type, relative to the repository root
    pub base_source: PathBuf,
    /// Imports added to every generated unit, before hoisted ones
    pub imports: Vec<String>,
    /// Compiler program plus leading arguments, when overridden
    pub compiler: Option<Vec<String>>,
}

impl LanguageSettings {
    /// Settings used when the manifest has no table for `language`.
    pub fn defaults(language: Language) -> Self {
        let base_class = match language {
            Language::Java => "ValidationBaseJava",
            Language::Kotlin => "ValidationBase",
        };
        let imports = match language {
            Language::Java => DEFAULT_JAVA_IMPORTS.iter().map(|s| s.to_string()).collect(),
            Language::Kotlin => Vec::new(),
        };
        Self {
            language,
            package: DEFAULT_PACKAGE.to_string(),
            base_class: base_class.to_string(),
            base_source: default_base_source(base_class, language),
            imports,
            compiler: None,
        }
    }
}

fn default_base_source(base_class: &str, language: Language) -> PathBuf {
    PathBuf::from("validation/base").join(format!("{}.{}", base_class, language.extension()))
}

/// Resolved output locations for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePaths {
    /// Shared directory for synthesized sources
    pub generated_dir: PathBuf,
    /// Compiler output directory for this language
    pub classes_dir: PathBuf,
    pub cache_file: PathBuf,
    pub baseline_file: PathBuf,
}

impl PathsConfig {
    /// Resolve this configuration for `language` under `root`.
    pub fn resolve(&self, root: &Path, language: Language) -> LanguagePaths {
        let lang = language.as_str();
        LanguagePaths {
            generated_dir: root.join(&self.generated),
            classes_dir: root
                .join(&self.classes)
                .join(format!("snippet-{}-classes", lang)),
            cache_file: root
                .join(&self.cache)
                .join(format!("snippet-{}-cache.json", lang)),
            baseline_file: root
                .join(&self.baselines)
                .join(format!("baseline-{}.json", lang)),
        }
    }
}

impl Manifest {
    /// Settings for `language`, merging its table over the defaults.
    pub fn settings(&self, language: Language) -> LanguageSettings {
        let mut settings = LanguageSettings::defaults(language);
        let Some(config) = self.language_config(language) else {
            return settings;
        };

        if let Some(package) = &config.package {
            settings.package = package.get_ref().clone();
        }
        if let Some(base_class) = &config.base_class {
            settings.base_class = base_class.get_ref().clone();
            settings.base_source = default_base_source(&settings.base_class, language);
        }
        if let Some(base_source) = &config.base_source {
            settings.base_source = base_source.clone();
        }
        if let Some(imports) = &config.imports {
            settings.imports = imports.iter().map(|i| i.get_ref().clone()).collect();
        }
        if let Some(compiler) = &config.compiler {
            settings.compiler = Some(compiler.get_ref().clone());
        }
        settings
    }
}
