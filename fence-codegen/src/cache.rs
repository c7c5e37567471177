//! Compilation cache.
//!
//! Maps a snippet's content hash to the error lines its last compilation
//! produced (empty means it compiled). The whole file belongs to one SDK
//! version and is discarded when the version changes.
//!
//! On disk:
//!
//! ```json
//! {"sdk_version": "8.2.0", "entries": {"<sha256>": ["  line 12: ..."]}}
//! ```

use std::{collections::BTreeMap, path::Path};

use eyre::Result;
use fencepost_core::{ContentHash, SdkVersion};
use serde::{Deserialize, Serialize};

use crate::persist::{StateError, read_json, write_json};

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    sdk_version: String,
    #[serde(default)]
    entries: BTreeMap<ContentHash, Vec<String>>,
}

/// Content hash to last known compiler errors, for one SDK version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileCache {
    entries: BTreeMap<ContentHash, Vec<String>>,
}

impl CompileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache for `version`.
    ///
    /// Fails if the file is missing, unreadable, corrupt or was written for
    /// another SDK version. Every failure means "start empty".
    pub fn try_load(path: &Path, version: &SdkVersion) -> Result<Self, StateError> {
        let file: CacheFile = read_json(path)?;
        if file.sdk_version != version.as_str() {
            return Err(StateError::VersionMismatch {
                path: path.to_path_buf(),
                found: file.sdk_version,
                expected: version.to_string(),
            });
        }
        Ok(Self {
            entries: file.entries,
        })
    }

    /// Load the cache for `version`, empty on any failure.
    #[cfg(test)]
    pub(crate) fn load(path: &Path, version: &SdkVersion) -> Self {
        Self::try_load(path, version).unwrap_or_default()
    }

    /// Stored errors for `hash`; `Some(&[])` is a cached pass.
    pub fn get(&self, hash: &ContentHash) -> Option<&[String]> {
        self.entries.get(hash).map(Vec::as_slice)
    }

    pub fn insert(&mut self, hash: ContentHash, errors: Vec<String>) {
        self.entries.insert(hash, errors);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the cache for `version`, replacing the file.
    pub fn save(&self, path: &Path, version: &SdkVersion) -> Result<()> {
        let file = CacheFile {
            sdk_version: version.to_string(),
            entries: self.entries.clone(),
        };
        write_json(path, &file, false)
    }
}
