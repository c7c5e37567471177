//! JSON state files (cache and baseline).

use std::path::{Path, PathBuf};

use eyre::Result;
use fencepost_core::write_file;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Why a state file could not be used. Callers treat every variant as
/// "no state" and carry on.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("'{}' does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid JSON, ignoring it", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' was built for SDK {found}, not {expected}", path.display())]
    VersionMismatch {
        path: PathBuf,
        found: String,
        expected: String,
    },
}

impl StateError {
    /// A missing file is the normal first-run case and not worth a warning.
    pub fn is_missing(&self) -> bool {
        matches!(self, StateError::Missing { .. })
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StateError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StateError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            StateError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&text).map_err(|source| StateError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    write_file(path, &text)
}
