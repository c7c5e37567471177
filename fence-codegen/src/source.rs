//! Snippet text transforms shared by the language plugins.
//!
//! Wrapping a snippet runs, in order: [`split_imports`],
//! [`normalize_ellipsis`], then the language-specific steps
//! ([`strip_visibility`], [`relocate_blocks`]).
//!
//! Block detection counts `{` and `}` per line. Braces inside string or char
//! literals and comments are counted like any other, so a snippet with an
//! unbalanced brace in a literal can swallow the lines after a relocated
//! declaration.

use std::sync::LazyLock;

use regex::Regex;

static ELLIPSIS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\.\.\.\s*$").expect("Invalid regex"));

/// Marker an ellipsis-only line is replaced with.
pub const ELLIPSIS_MARKER: &str = "// ...";

/// Peel off the `import` lines a snippet carries.
///
/// Returns the trimmed imports in their original order and the remaining
/// lines joined back together.
pub fn split_imports(content: &str) -> (Vec<String>, String) {
    let mut imports = Vec::new();
    let mut rest = Vec::new();
    for line in content.split('\n') {
        if line.trim_start().starts_with("import ") {
            imports.push(line.trim().to_string());
        } else {
            rest.push(line);
        }
    }
    (imports, rest.join("\n"))
}

/// Replace every line consisting only of `...` with [`ELLIPSIS_MARKER`],
/// keeping the line count.
pub fn normalize_ellipsis(body: &str) -> String {
    body.split('\n')
        .map(|line| {
            if ELLIPSIS_LINE.is_match(line) {
                ELLIPSIS_MARKER
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove explicit visibility modifiers matched by `pattern`.
///
/// The pattern must capture the leading indentation as group 1 and the
/// declaration keyword as group 2; the match is replaced by `$1$2`.
pub fn strip_visibility(body: &str, pattern: &Regex) -> String {
    pattern.replace_all(body, "$1$2").into_owned()
}

/// Net brace depth change of one line.
fn brace_delta(line: &str) -> isize {
    line.chars().fold(0, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}

/// Collect the brace-delimited block that starts at `lines[start]`.
///
/// Lines are taken until the running depth returns to zero or below. A
/// declaration without an opening brace on its first line is a block of
/// one line. Returns the block text and the index of the first line after it.
pub(crate) fn extract_balanced_block(lines: &[&str], start: usize) -> (String, usize) {
    let mut block = vec![lines[start]];
    let mut depth = brace_delta(lines[start]);
    let mut next = start + 1;
    while next < lines.len() && depth > 0 {
        block.push(lines[next]);
        depth += brace_delta(lines[next]);
        next += 1;
    }
    (block.join("\n"), next)
}

/// Where a relocated declaration is placed in the generated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Package level, before the generated type
    File,
    /// Inside the generated type, before the wrapping method
    Type,
}

/// A snippet body split into relocated declarations and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relocated {
    pub file_scope: Vec<String>,
    pub type_scope: Vec<String>,
    pub body: String,
}

/// Lift declarations that cannot live inside a method body.
///
/// `classify` is asked about every line outside an already lifted block;
/// when it names a [`Scope`], the balanced block starting at that line is
/// moved there.
pub fn relocate_blocks(body: &str, classify: impl Fn(&str) -> Option<Scope>) -> Relocated {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut relocated = Relocated::default();
    let mut remaining = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        match classify(lines[i]) {
            Some(scope) => {
                let (block, next) = extract_balanced_block(&lines, i);
                match scope {
                    Scope::File => relocated.file_scope.push(block),
                    Scope::Type => relocated.type_scope.push(block),
                }
                i = next;
            }
            None => {
                remaining.push(lines[i]);
                i += 1;
            }
        }
    }

    relocated.body = remaining.join("\n");
    relocated
}
