//! Per-language compiler conventions.

use std::{ffi::OsString, path::Path};

/// How a language's compiler is found, invoked and read.
///
/// Each plugin exposes one of these as a constant. The compiler driver
/// combines it with a discovered toolchain to build invocations.
#[derive(Debug, Clone, Copy)]
pub struct CompilerConvention {
    /// Binary looked up on `PATH` when nothing else is configured (e.g. "javac")
    pub binary: &'static str,
    /// Environment variable naming the toolchain home (e.g. "JAVA_HOME")
    pub home_var: &'static str,
    /// Arguments placed between the classpath and the output directory
    pub extra_args: &'static [&'static str],
    /// Regex over compiler output capturing file, line and message
    pub diagnostic_pattern: &'static str,
}

impl CompilerConvention {
    /// Arguments for compiling `source` into `out_dir` against `classpath`.
    ///
    /// Layout: `-cp <classpath> <extra args> -d <out_dir> <source>`.
    pub fn args(&self, classpath: &str, out_dir: &Path, source: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(self.extra_args.len() + 5);
        args.push("-cp".into());
        args.push(classpath.into());
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push("-d".into());
        args.push(out_dir.as_os_str().to_owned());
        args.push(source.as_os_str().to_owned());
        args
    }
}
