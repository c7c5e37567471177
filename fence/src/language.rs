//! Unified language dispatch.
//!
//! Centralizes the mapping from a [`Language`] to its plugin.

use fencepost_codegen::language::LanguagePlugin;
use fencepost_codegen_java::JavaPlugin;
use fencepost_codegen_kotlin::KotlinPlugin;
use fencepost_manifest::{Language, Manifest};

/// Create the plugin for `language`, configured from the manifest.
pub fn plugin(manifest: &Manifest, language: Language) -> Box<dyn LanguagePlugin> {
    let settings = manifest.settings(language);
    match language {
        Language::Java => Box::new(JavaPlugin::new(settings)),
        Language::Kotlin => Box::new(KotlinPlugin::new(settings)),
    }
}
