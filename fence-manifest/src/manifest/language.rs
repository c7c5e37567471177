//! Snippet languages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Languages whose fenced snippets can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Java, compiled with `javac`
    Java,
    /// Kotlin, compiled with `kotlinc`
    Kotlin,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Java, Language::Kotlin];

    /// Returns the language identifier as used in fences and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
        }
    }

    /// Human-readable name, e.g. "Kotlin".
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
        }
    }

    /// Source file extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            _ => Err(format!(
                "unknown language '{}', expected 'java' or 'kotlin'",
                s
            )),
        }
    }
}
