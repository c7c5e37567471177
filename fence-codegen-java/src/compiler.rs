//! Java compiler conventions.

use fencepost_codegen::language::CompilerConvention;

/// `javac`, located through `JAVA_HOME`, targeting Java 8 with no cap on
/// reported errors.
pub const JAVA_COMPILER: CompilerConvention = CompilerConvention {
    binary: "javac",
    home_var: "JAVA_HOME",
    extra_args: &["-source", "8", "-target", "8", "-Xmaxerrs", "10000"],
    diagnostic_pattern: r"([^\s:]+\.java):(\d+):\s*error:\s*(.+)",
};
