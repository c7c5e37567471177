//! Core operations.
//!
//! This module contains the business logic for fence commands,
//! separated from CLI argument parsing and output rendering.

pub mod clean;
pub mod list;
pub mod validate;

pub use clean::clean;
pub use list::list;
pub use validate::validate;
