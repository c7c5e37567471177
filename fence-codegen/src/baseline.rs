//! Baseline of accepted failures.
//!
//! A baseline entry is the triple `(hash, file, snippet)`. In normal runs,
//! snippets whose triple is listed are skipped before generation. In capture
//! runs, the file is rewritten with exactly the failing triples, sorted by
//! file then snippet index.

use std::{collections::HashSet, path::Path};

use eyre::{Result, WrapErr};
use fencepost_core::{ContentHash, Snippet, SnippetId};
use serde::{Deserialize, Serialize};

use crate::persist::{StateError, read_json, write_json};

/// One accepted failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub hash: ContentHash,
    pub file: String,
    pub snippet: usize,
}

impl BaselineEntry {
    pub fn of(snippet: &Snippet) -> Self {
        Self {
            hash: snippet.hash().clone(),
            file: snippet.source_file().to_string(),
            snippet: snippet.index(),
        }
    }

    pub fn id(&self) -> SnippetId {
        SnippetId {
            file: self.file.clone(),
            index: self.snippet,
        }
    }
}

/// A set of accepted failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Baseline {
    entries: HashSet<BaselineEntry>,
}

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a baseline file. Missing or corrupt files are errors the caller
    /// treats as an empty baseline.
    pub fn try_load(path: &Path) -> Result<Self, StateError> {
        let entries: Vec<BaselineEntry> = read_json(path)?;
        Ok(entries.into_iter().collect())
    }

    /// Load a baseline file, empty on any failure.
    #[cfg(test)]
    pub(crate) fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_default()
    }

    /// Whether this snippet's exact triple is accepted.
    ///
    /// Editing the snippet changes its hash and moving it changes its index,
    /// so either makes it count again.
    pub fn contains(&self, snippet: &Snippet) -> bool {
        self.entries.contains(&BaselineEntry::of(snippet))
    }

    pub fn insert(&mut self, entry: BaselineEntry) {
        self.entries.insert(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by file, then index, then hash.
    pub fn sorted(&self) -> Vec<&BaselineEntry> {
        let mut sorted: Vec<&BaselineEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            (&a.file, a.snippet, &a.hash).cmp(&(&b.file, b.snippet, &b.hash))
        });
        sorted
    }

    /// Overwrite `path` with this baseline, pretty-printed in sorted order.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, &self.sorted(), true)
            .wrap_err_with(|| format!("failed to write baseline {}", path.display()))
    }
}

impl FromIterator<BaselineEntry> for Baseline {
    fn from_iter<I: IntoIterator<Item = BaselineEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
