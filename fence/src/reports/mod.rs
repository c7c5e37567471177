//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod clean;
mod list;
mod output;
mod validate;

pub use clean::CleanReport;
pub use list::{ListReport, SnippetEntry};
pub use output::{Report, TerminalOutput};
pub use validate::ValidateReport;
