//! Validation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that runs one language's
//! validation from extraction to the baseline update. The pipeline provides:
//!
//! - Explicit phase boundaries (extract → baseline-filter → generate →
//!   compile → baseline-capture)
//! - Hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`ValidationContext`]
//!
//! # Example
//!
//! ```ignore
//! use fencepost_codegen::pipeline::{Pipeline, TimingHook, ValidationContext};
//!
//! let ctx = ValidationContext::new(plugin, classpath, toolchain, options);
//! let ctx = Pipeline::new().hook(TimingHook::new()).run(ctx)?;
//!
//! let summary = ValidationSummary::from_context(&ctx);
//! std::process::exit(summary.exit_code());
//! ```

mod context;
mod diagnostic;
mod hook;
mod phase;
pub mod phases;
mod runner;
mod timing;


pub use context::{Mode, Outcome, ValidateOptions, ValidationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use hook::Hook;
pub use phase::Phase;
pub use runner::Pipeline;
pub use timing::TimingHook;
