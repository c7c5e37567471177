//! List operation - show the snippets of one language without compiling.

use std::path::Path;

use eyre::Result;
use fencepost_codegen::{
    extract::Extractor,
    unit::{ClassNames, allocate_class_names},
};
use fencepost_manifest::{Language, Manifest};

use crate::{
    language,
    reports::{ListReport, SnippetEntry},
};

/// Execute the list operation.
///
/// Extracts snippets the same way a validation run does and pairs each with
/// the class name it would be compiled under.
pub fn list(manifest: &Manifest, root: &Path, language: Language) -> Result<ListReport> {
    let plugin = language::plugin(manifest, language);
    let snippets = Extractor::new(plugin.fence(), root)
        .roots(manifest.project.docs.get_ref())
        .extensions(manifest.project.extensions.iter().cloned())
        .extract()?;

    let ClassNames { names, .. } = allocate_class_names(plugin.as_ref(), &snippets);
    let snippets = snippets
        .iter()
        .zip(names)
        .map(|(snippet, class_name)| SnippetEntry {
            file: snippet.source_file().to_string(),
            index: snippet.index(),
            hash: snippet.hash().short().to_string(),
            class_name,
            lines: snippet.content().lines().count(),
        })
        .collect();

    Ok(ListReport {
        language: plugin.name(),
        snippets,
    })
}
