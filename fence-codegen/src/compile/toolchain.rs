//! Compiler discovery.

use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::Command,
};

use crate::language::CompilerConvention;

/// The compiler program plus leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    program: OsString,
    args: Vec<OsString>,
}

impl Toolchain {
    /// A toolchain from an explicit command line: program first, then
    /// leading arguments (e.g. `["sh", "fake-javac.sh"]`).
    pub fn new<I, S>(command: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut parts = command.into_iter().map(Into::into);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// A toolchain from a program and its leading arguments.
    pub fn from_parts<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Find the compiler for `convention`.
    ///
    /// In order: the configured `override_command`; `<home>/bin/<binary>`
    /// when the home variable is set and that file exists; the bare binary
    /// name, left to `PATH`. Depends only on its inputs and the filesystem,
    /// so callers pass the environment lookup in.
    pub fn discover(
        convention: &CompilerConvention,
        override_command: Option<&[String]>,
        env: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        if let Some(toolchain) = override_command.and_then(|cmd| Self::new(cmd.iter().cloned())) {
            return toolchain;
        }

        if let Some(home) = env(convention.home_var) {
            let candidate = Path::new(&home).join("bin").join(convention.binary);
            if candidate.exists() {
                return Self::from_parts(candidate, Vec::<OsString>::new());
            }
        }

        Self::from_parts(convention.binary, Vec::<OsString>::new())
    }

    /// [`Toolchain::discover`] against the process environment.
    pub fn from_env(convention: &CompilerConvention, override_command: Option<&[String]>) -> Self {
        Self::discover(convention, override_command, |key| std::env::var_os(key))
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// A command with the program and leading arguments set.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Human-readable command line.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
