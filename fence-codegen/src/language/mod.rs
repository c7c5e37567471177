//! Language-specific abstractions.
//!
//! This module provides the traits and types a language plugin implements:
//! - [`LanguagePlugin`] - Main capability interface used by the pipeline
//! - [`CompilerConvention`] - How a language's compiler is found, invoked and read

mod compiler;
mod traits;

pub use compiler::CompilerConvention;
pub use traits::{LanguagePlugin, fence_regex, snippet_class_name};
