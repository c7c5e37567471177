//! Kotlin language plugin for fencepost.
//!
//! Snippets become `class Snippet_kotlin_… : <base>()` with the body inside
//! `fun validate()`. Declarations that cannot live in a function body are
//! lifted out first: top-level `object`s to package scope, `companion
//! object`s into the class.

mod compiler;
mod plugin;
mod wrap;

pub use compiler::KOTLIN_COMPILER;
pub use plugin::KotlinPlugin;
pub use wrap::{classify_declaration, wrap_kotlin};
