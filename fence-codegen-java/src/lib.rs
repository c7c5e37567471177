//! Java language plugin for fencepost.
//!
//! Snippets become `public class Snippet_java_… extends <base>` with the body
//! inside `void validate() throws Exception`, compiled one file per `javac`
//! process.

mod compiler;
mod plugin;
mod wrap;

pub use compiler::JAVA_COMPILER;
pub use plugin::JavaPlugin;
pub use wrap::wrap_java;
