//! Shared snippet validation machinery for fencepost.
//!
//! This crate provides the language-agnostic parts of the validator, used by
//! the language plugins (e.g., `fencepost-codegen-kotlin`) and the `fence`
//! binary.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`language`] - The [`LanguagePlugin`](language::LanguagePlugin) capability interface
//! - [`source`] - Snippet text transforms (import hoisting, block relocation)
//! - [`extract`] - Fenced block extraction from documentation trees
//! - [`unit`] - Generated compilation units and class-name allocation
//! - [`cache`] - Per-SDK-version compilation cache
//! - [`baseline`] - Committed allow-list of accepted failures
//! - [`compile`] - Classpath resolution, toolchain discovery and the parallel compiler driver
//! - [`pipeline`] - Phase/hook pipeline tying everything together
//! - [`summary`] - Run outcome consumed by reporters
//! - [`testing`] - Test utilities (feature-gated)

pub mod baseline;
pub mod builder;
pub mod cache;
pub mod compile;
pub mod extract;
pub mod language;
mod persist;
pub mod pipeline;
pub mod source;
pub mod summary;
pub mod unit;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use persist::StateError;
