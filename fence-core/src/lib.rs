//! Core utilities and types for the fencepost snippet validator.
//!
//! This crate provides the fundamental snippet identity types and the
//! filesystem helpers shared across the fencepost crates.

mod file;
mod hash;
mod sdk;
mod snippet;
mod utils;

// File operations
pub use file::{
    GeneratedFile, remove_dir_if_exists, remove_file_if_exists, remove_files_with_extension,
    write_file,
};
// Fundamental types
pub use hash::ContentHash;
pub use sdk::SdkVersion;
pub use snippet::{Snippet, SnippetId};
// String utilities
pub use utils::{normalize_path, short_digest, slugify};
