//! External compilation.
//!
//! - [`ClasspathResolver`] - SDK version to classpath, fatal on failure
//! - [`Toolchain`] - compiler program discovered from the environment
//! - [`CompilerDriver`] - base type first, then one process per unit in parallel
//! - [`parse_diagnostics`] - compiler output to error lines

mod classpath;
mod diagnostics;
mod driver;
mod error;
mod toolchain;

pub use classpath::{ClasspathResolver, CommandClasspath, StaticClasspath, resolver_from_config};
pub use diagnostics::{DiagnosticParser, parse_diagnostics};
pub use driver::{CompilerDriver, UnitResult};
pub use error::CompileError;
pub use toolchain::Toolchain;
