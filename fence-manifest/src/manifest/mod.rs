//! Manifest types and parsing for fence.toml files.

mod file;
mod language;
mod parse;
mod sdk;
mod settings;
mod validate;

use std::path::PathBuf;

pub use file::FenceToml;
pub use language::Language;
use serde::Deserialize;
pub use sdk::{DEFAULT_VERSION_PATTERN, SdkConfig, VersionSource};
pub use settings::{LanguagePaths, LanguageSettings};
use toml::Spanned;

/// Root manifest for fence.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where the documentation lives
    pub project: ProjectConfig,

    /// Which SDK version snippets compile against
    pub sdk: SdkConfig,

    /// Output locations for generated sources, classes, cache and baselines
    #[serde(default)]
    pub paths: PathsConfig,

    /// How the SDK classpath is resolved
    #[serde(default)]
    pub classpath: ClasspathConfig,

    /// Java wrapping options
    #[serde(default)]
    pub java: Option<LanguageConfig>,

    /// Kotlin wrapping options
    #[serde(default)]
    pub kotlin: Option<LanguageConfig>,
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Repository root, relative to the manifest directory
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Documentation roots, relative to the repository root
    pub docs: Spanned<Vec<String>>,

    /// Document file extensions to scan
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

/// `[paths]` section. Every path is relative to the repository root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PathsConfig {
    /// Shared directory for synthesized sources
    pub generated: PathBuf,
    /// Parent of the per-language compiled classes directories
    pub classes: PathBuf,
    /// Directory holding the per-language cache files
    pub cache: PathBuf,
    /// Directory holding the per-language baseline files
    pub baselines: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            generated: PathBuf::from("validation/generated"),
            classes: PathBuf::from("validation/build"),
            cache: PathBuf::from("validation/cache"),
            baselines: PathBuf::from("validation/baselines"),
        }
    }
}

/// `[classpath]` section.
///
/// The command is run with `{version}` replaced by the SDK version. Its
/// classpath is read from `output` when set, otherwise from stdout. The
/// static `entries` are appended to whatever the command produced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClasspathConfig {
    #[serde(default)]
    pub command: Option<Spanned<Vec<String>>>,
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub entries: Vec<String>,
}

/// `[java]` / `[kotlin]` sections. Missing keys fall back to per-language
/// defaults, see [`LanguageSettings`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    #[serde(default)]
    pub package: Option<Spanned<String>>,
    #[serde(default)]
    pub base_class: Option<Spanned<String>>,
    #[serde(default)]
    pub base_source: Option<PathBuf>,
    #[serde(default)]
    pub imports: Option<Vec<Spanned<String>>>,
    #[serde(default)]
    pub compiler: Option<Spanned<Vec<String>>>,
}

impl Manifest {
    /// Raw configuration table for a language, if present.
    pub fn language_config(&self, language: Language) -> Option<&LanguageConfig> {
        match language {
            Language::Java => self.java.as_ref(),
            Language::Kotlin => self.kotlin.as_ref(),
        }
    }
}
