//! Clean operation - remove one language's build state.

use std::path::Path;

use eyre::Result;
use fencepost_core::{remove_dir_if_exists, remove_file_if_exists, remove_files_with_extension};
use fencepost_manifest::{Language, Manifest};

use crate::reports::CleanReport;

/// Execute the clean operation.
///
/// Removes the language's generated sources, its compiled classes and its
/// cache file. Sources of the other language and the baseline are kept.
pub fn clean(manifest: &Manifest, root: &Path, language: Language) -> Result<CleanReport> {
    let paths = manifest.paths.resolve(root, language);

    let sources = remove_files_with_extension(&paths.generated_dir, language.extension())?;
    let mut removed = Vec::new();
    if remove_dir_if_exists(&paths.classes_dir)? {
        removed.push(paths.classes_dir.display().to_string());
    }
    if remove_file_if_exists(&paths.cache_file)? {
        removed.push(paths.cache_file.display().to_string());
    }

    Ok(CleanReport {
        language: language.display_name(),
        sources,
        removed,
    })
}
