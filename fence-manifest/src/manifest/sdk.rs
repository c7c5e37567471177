//! SDK version resolution.

use std::path::{Path, PathBuf};

use fencepost_core::SdkVersion;
use regex::Regex;
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result};

/// Matches the "current" version label of a docusaurus versions config,
/// e.g. `current: { label: '8.2.0', path: 'next' }`.
pub const DEFAULT_VERSION_PATTERN: &str = r#"current\s*:\s*\{[^}]*?label\s*:\s*['"]([^'"]+)['"]"#;

/// `[sdk]` section: exactly one of `version` or `from`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkConfig {
    #[serde(default)]
    pub version: Option<Spanned<String>>,
    #[serde(default)]
    pub from: Option<VersionSource>,
}

/// Read the version out of a file with a regex.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionSource {
    /// File to search, relative to the repository root
    pub file: PathBuf,
    /// Regex whose first capture group is the version
    #[serde(default)]
    pub pattern: Option<Spanned<String>>,
}

impl VersionSource {
    pub fn pattern(&self) -> &str {
        self.pattern
            .as_ref()
            .map(|p| p.get_ref().as_str())
            .unwrap_or(DEFAULT_VERSION_PATTERN)
    }
}

impl SdkConfig {
    /// Resolve the configured SDK version.
    ///
    /// A literal `version` wins. Otherwise the first capture of the pattern
    /// in `from.file` is used; no match is an error.
    pub fn resolve(&self, root: &Path) -> Result<SdkVersion> {
        if let Some(version) = &self.version {
            return parse_version(version.get_ref());
        }

        let Some(source) = &self.from else {
            return Err(Box::new(Error::InvalidSdkVersion {
                reason: "[sdk] sets neither 'version' nor 'from'".to_string(),
            }));
        };

        let path = root.join(&source.file);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;

        let pattern = source.pattern();
        let regex = Regex::new(pattern).map_err(|e| {
            Box::new(Error::InvalidSdkVersion {
                reason: e.to_string(),
            })
        })?;

        let captured = regex
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                Box::new(Error::SdkVersionNotFound {
                    path: path.clone(),
                    pattern: pattern.to_string(),
                })
            })?;

        parse_version(captured)
    }
}

/// Parse a version string given on the command line or in the manifest.
pub(crate) fn parse_version(raw: &str) -> Result<SdkVersion> {
    raw.parse()
        .map_err(|reason| Box::new(Error::InvalidSdkVersion { reason }))
}
