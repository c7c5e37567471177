use std::fmt;

use crate::{ContentHash, normalize_path};

/// One fenced code block found in one document.
///
/// Identity is `(source_file, index)`: the path relative to the repository
/// root plus the block's rank among the retained blocks of that file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    id: SnippetId,
    content: String,
    hash: ContentHash,
}

impl Snippet {
    /// Create a snippet. The path is normalized to forward slashes.
    pub fn new(source_file: impl AsRef<str>, index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        let hash = ContentHash::of(&content);
        Self {
            id: SnippetId {
                file: normalize_path(source_file.as_ref()),
                index,
            },
            content,
            hash,
        }
    }

    pub fn id(&self) -> &SnippetId {
        &self.id
    }

    /// Path of the document, relative to the repository root.
    pub fn source_file(&self) -> &str {
        &self.id.file
    }

    /// Rank of this block among the retained blocks of its document.
    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }
}

/// Location of a snippet: document path and in-document index.
///
/// Ordering is by file, then index, which is the canonical report and
/// baseline order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnippetId {
    pub file: String,
    pub index: usize,
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  (snippet {})", self.file, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_follows_content() {
        let a = Snippet::new("docs/a.md", 0, "val x = 1");
        let b = Snippet::new("docs/b.md", 3, "val x = 1");
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_path_is_normalized() {
        let s = Snippet::new("docs\\sdks\\intro.md", 1, "");
        assert_eq!(s.source_file(), "docs/sdks/intro.md");
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![
            SnippetId {
                file: "b.md".into(),
                index: 0,
            },
            SnippetId {
                file: "a.md".into(),
                index: 2,
            },
            SnippetId {
                file: "a.md".into(),
                index: 1,
            },
        ];
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["a.md  (snippet 1)", "a.md  (snippet 2)", "b.md  (snippet 0)"]
        );
    }
}
