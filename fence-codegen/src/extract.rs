//! Fenced code block extraction.
//!
//! The extractor walks the documentation roots, reads every document with a
//! configured extension and returns the snippets of one language in a
//! stable order: documents sorted by their normalized relative path, blocks
//! in order of occurrence.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use eyre::{Result, WrapErr};
use fencepost_core::{Snippet, normalize_path};
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// `#` or `# ` at line start marks a line hidden in the rendered docs.
static HIDDEN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# ?").expect("Invalid regex"));

/// A block consisting of nothing but an ellipsis.
static ONLY_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\.{3}\s*$").expect("Invalid regex"));

/// Finds the snippets of one language in a documentation tree.
#[derive(Debug, Clone)]
pub struct Extractor {
    fence: Regex,
    base: PathBuf,
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl Extractor {
    /// Create an extractor for `fence`. Snippet paths are reported relative
    /// to `base`, the repository root.
    pub fn new(fence: Regex, base: impl Into<PathBuf>) -> Self {
        Self {
            fence,
            base: base.into(),
            roots: Vec::new(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
        }
    }

    /// Add a documentation root. Relative roots resolve against the base.
    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.roots.push(self.base.join(root));
        self
    }

    /// Add several documentation roots.
    pub fn roots<I, P>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        roots.into_iter().fold(self, |ex, root| ex.root(root))
    }

    /// Replace the document extensions to scan (without the dot).
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Extract every snippet under the configured roots.
    ///
    /// Missing roots are skipped with a warning. Running twice on an
    /// unchanged tree yields identical results.
    pub fn extract(&self) -> Result<Vec<Snippet>> {
        let documents = self.documents()?;
        debug!(documents = documents.len(), "scanning documents");

        let mut snippets = Vec::new();
        for (relative, path) in &documents {
            let text = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            snippets.extend(extract_from_text(&self.fence, relative, &text));
        }
        Ok(snippets)
    }

    /// Documents under all roots, keyed and ordered by normalized relative path.
    fn documents(&self) -> Result<BTreeMap<String, PathBuf>> {
        let mut documents = BTreeMap::new();
        for root in &self.roots {
            if !root.exists() {
                warn!(root = %root.display(), "documentation root does not exist, skipping");
                continue;
            }

            for entry in WalkDir::new(root) {
                let entry =
                    entry.wrap_err_with(|| format!("failed to walk {}", root.display()))?;
                if !entry.file_type().is_file() || !self.has_document_extension(entry.path()) {
                    continue;
                }
                let path = entry.into_path();
                let relative = path.strip_prefix(&self.base).unwrap_or(path.as_path());
                documents.insert(normalize_path(&relative.to_string_lossy()), path.clone());
            }
        }
        Ok(documents)
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Extract the snippets of one document.
///
/// Each block body is right-trimmed and its hidden-line prefixes removed.
/// Blocks that are only `...` are dropped and do not consume an index.
pub fn extract_from_text(fence: &Regex, source_file: &str, text: &str) -> Vec<Snippet> {
    fence
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|body| restore_hidden_lines(body.as_str().trim_end()))
        .filter(|content| !ONLY_DOTS.is_match(content))
        .enumerate()
        .map(|(index, content)| Snippet::new(source_file, index, content))
        .collect()
}

/// Strip the `# ` / `#` prefix of lines hidden in the rendered docs.
pub fn restore_hidden_lines(content: &str) -> String {
    HIDDEN_LINE.replace_all(content, "").into_owned()
}
