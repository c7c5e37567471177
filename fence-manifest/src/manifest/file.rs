use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a fence.toml file with both raw content and parsed manifest.
pub struct FenceToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl FenceToml {
    /// Open and parse a fence.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The repository root: the manifest's directory joined with
    /// `[project].root`.
    pub fn root(&self) -> PathBuf {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        match &self.manifest.project.root {
            Some(root) => dir.join(root),
            None => dir,
        }
    }
}
