use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The SDK version snippets are compiled against (e.g. `8.2.0`).
///
/// Treated as an opaque label: two versions are the same only if their
/// strings are equal. The compilation cache is scoped to one version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SdkVersion(String);

impl SdkVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SdkVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("SDK version must not be empty".to_string());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(format!("SDK version '{}' must not contain whitespace", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for SdkVersion {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SdkVersion> for String {
    fn from(version: SdkVersion) -> Self {
        version.0
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
