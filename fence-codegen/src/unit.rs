//! Generated compilation units.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use fencepost_core::{GeneratedFile, Snippet, short_digest};

use crate::language::LanguagePlugin;

/// The synthesized source for one snippet.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub snippet: Snippet,
    pub class_name: String,
    pub source_text: String,
    extension: &'static str,
}

impl GeneratedUnit {
    /// Wrap `snippet` with `plugin` under the already allocated `class_name`.
    pub fn new(plugin: &dyn LanguagePlugin, snippet: Snippet, class_name: String) -> Self {
        let source_text = plugin.wrap(&class_name, &snippet);
        Self {
            snippet,
            class_name,
            source_text,
            extension: plugin.file_extension(),
        }
    }

    /// File name of the unit, e.g. `Snippet_java_docs_a_md_000.java`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name, self.extension)
    }
}

impl GeneratedFile for GeneratedUnit {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        self.source_text.clone()
    }
}

/// Class names for a run, plus the names that had to be disambiguated.
#[derive(Debug, Clone, Default)]
pub struct ClassNames {
    /// One name per snippet, in snippet order
    pub names: Vec<String>,
    /// Base names shared by snippets from different paths
    pub collisions: Vec<String>,
}

/// Allocate a unique class name for every snippet.
///
/// Names come from [`LanguagePlugin::class_name`]. Two different paths can
/// slug to the same text (`a-b.md` and `a_b.md`); every snippet sharing such
/// a name gets `_` plus a short digest of its path appended.
pub fn allocate_class_names(plugin: &dyn LanguagePlugin, snippets: &[Snippet]) -> ClassNames {
    let base: Vec<String> = snippets.iter().map(|s| plugin.class_name(s)).collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &base {
        *counts.entry(name.as_str()).or_default() += 1;
    }

    let mut collisions: Vec<String> = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(name, _)| name.to_string())
        .collect();
    collisions.sort();

    let names = base
        .iter()
        .zip(snippets)
        .map(|(name, snippet)| {
            if counts[name.as_str()] > 1 {
                format!("{}_{}", name, short_digest(snippet.source_file()))
            } else {
                name.clone()
            }
        })
        .collect();

    ClassNames { names, collisions }
}
