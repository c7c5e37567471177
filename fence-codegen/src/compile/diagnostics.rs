//! Compiler output parsing.

use std::path::Path;

use regex::Regex;

/// Turns compiler output into report lines.
///
/// The pattern must capture the file as group 1, the line number as group 2
/// and the message as group 3.
#[derive(Debug, Clone)]
pub struct DiagnosticParser {
    pattern: Regex,
}

impl DiagnosticParser {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Error lines for the unit whose file name is `unit_file`.
    pub fn parse(&self, output: &str, unit_file: &str) -> Vec<String> {
        parse_diagnostics(&self.pattern, output, unit_file)
    }
}

/// Extract error lines from combined compiler output.
///
/// Matches of `pattern` in `unit_file` become `  line N: message`; matches
/// in any other file keep the file name, `  File.kt:N: message`. When the
/// pattern finds nothing, every line containing `error:` (any case) is kept
/// as `  <trimmed line>`.
pub fn parse_diagnostics(pattern: &Regex, output: &str, unit_file: &str) -> Vec<String> {
    let errors: Vec<String> = pattern
        .captures_iter(output)
        .filter_map(|caps| {
            let file = caps.get(1)?.as_str();
            let line = caps.get(2)?.as_str();
            let message = caps.get(3)?.as_str().trim();
            let name = Path::new(file)
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            Some(if name == unit_file {
                format!("  line {}: {}", line, message)
            } else {
                format!("  {}:{}: {}", name, line, message)
            })
        })
        .collect();

    if !errors.is_empty() {
        return errors;
    }

    output
        .lines()
        .filter(|line| line.to_lowercase().contains("error:"))
        .map(|line| format!("  {}", line.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVA: &str = r"([^\s:]+\.java):(\d+):\s*error:\s*(.+)";
    const KOTLIN: &str = r"([^\s:]+\.kt):(\d+):\d+:\s*error:\s*(.+)";

    #[test]
    fn test_javac_output() {
        let parser = DiagnosticParser::new(JAVA).unwrap();
        let output = "\
/gen/Snippet_java_a_md_000.java:14: error: cannot find symbol
        Foo foo = new Foo();
        ^
  symbol:   class Foo
/gen/Snippet_java_a_md_000.java:15: error: ';' expected
2 errors
";
        assert_eq!(
            parser.parse(output, "Snippet_java_a_md_000.java"),
            vec!["  line 14: cannot find symbol", "  line 15: ';' expected"]
        );
    }

    #[test]
    fn test_kotlinc_output() {
        let parser = DiagnosticParser::new(KOTLIN).unwrap();
        let output = "/gen/Snippet_kotlin_a_md_001.kt:12:9: error: unresolved reference: foo\n";
        assert_eq!(
            parser.parse(output, "Snippet_kotlin_a_md_001.kt"),
            vec!["  line 12: unresolved reference: foo"]
        );
    }

    #[test]
    fn test_other_file_keeps_name() {
        let parser = DiagnosticParser::new(KOTLIN).unwrap();
        let output = "/base/ValidationBase.kt:3:1: error: expecting a top level declaration\n";
        assert_eq!(
            parser.parse(output, "Snippet_kotlin_a_md_001.kt"),
            vec!["  ValidationBase.kt:3: expecting a top level declaration"]
        );
    }

    #[test]
    fn test_fallback_to_raw_error_lines() {
        let parser = DiagnosticParser::new(KOTLIN).unwrap();
        let output = "info: kotlinc-jvm 2.0\nERROR: Source file or directory not found: x.kt\nwarning: y\n";
        assert_eq!(
            parser.parse(output, "x.kt"),
            vec!["  ERROR: Source file or directory not found: x.kt"]
        );
    }

    #[test]
    fn test_nothing_found() {
        let parser = DiagnosticParser::new(JAVA).unwrap();
        assert!(parser.parse("Note: some input files use unchecked operations.\n", "A.java").is_empty());
    }
}
