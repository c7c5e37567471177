//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline, in
//! order:
//!
//! - [`ExtractPhase`] - finds the language's snippets in the docs
//! - [`BaselineFilterPhase`] - drops accepted failures (normal mode)
//! - [`GeneratePhase`] - names, wraps and writes compilation units
//! - [`CompilePhase`] - consults the cache and compiles the misses
//! - [`BaselineCapturePhase`] - rewrites the baseline (capture mode)

mod baseline;
mod compile;
mod extract;
mod generate;

pub use baseline::{BaselineCapturePhase, BaselineFilterPhase};
pub use compile::CompilePhase;
pub use extract::ExtractPhase;
pub use generate::GeneratePhase;
