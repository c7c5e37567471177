// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `fence.toml` parsing and validation.
//!
//! The manifest describes where the documentation lives, which SDK version
//! snippets compile against, how the SDK classpath is resolved, and how each
//! language wraps its snippets.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ClasspathConfig, FenceToml, Language, LanguageConfig, LanguagePaths, LanguageSettings,
    Manifest, PathsConfig, ProjectConfig, SdkConfig, VersionSource, DEFAULT_VERSION_PATTERN,
};
