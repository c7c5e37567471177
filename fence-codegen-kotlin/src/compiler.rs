//! Kotlin compiler conventions.

use fencepost_codegen::language::CompilerConvention;

/// `kotlinc`, located through `KOTLIN_HOME`. Diagnostics carry a column,
/// which is dropped.
pub const KOTLIN_COMPILER: CompilerConvention = CompilerConvention {
    binary: "kotlinc",
    home_var: "KOTLIN_HOME",
    extra_args: &[],
    diagnostic_pattern: r"([^\s:]+\.kt):(\d+):\d+:\s*error:\s*(.+)",
};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use fencepost_codegen::compile::DiagnosticParser;

    use super::*;

    #[test]
    fn test_kotlinc_arguments() {
        let args: Vec<String> = KOTLIN_COMPILER
            .args("sdk.jar", Path::new("out"), Path::new("gen/A.kt"))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-cp", "sdk.jar", "-d", "out", "gen/A.kt"]);
    }

    #[test]
    fn test_kotlinc_diagnostics() {
        let parser = DiagnosticParser::new(KOTLIN_COMPILER.diagnostic_pattern).unwrap();
        let output = "\
gen/A.kt:12:9: error: unresolved reference: scanner
gen/A.kt:13:1: warning: variable 'x' is never used
";
        assert_eq!(
            parser.parse(output, "A.kt"),
            vec!["  line 12: unresolved reference: scanner"]
        );
    }
}
