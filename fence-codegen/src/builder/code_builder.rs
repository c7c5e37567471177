//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for loops over snippet lines.
/// Blank lines are never indented, so generated sources carry no trailing
/// whitespace.
///
/// # Example (Consuming API)
///
/// ```
/// use fencepost_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::jvm()
///     .line("class Foo {")
///     .indent()
///     .line("fun bar() {}")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class Foo {\n    fun bar() {}\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use fencepost_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::jvm();
/// builder
///     .push_line("void validate() {")
///     .push_indent()
///     .push_lines("int x = 1;\n\nx++;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "void validate() {\n    int x = 1;\n\n    x++;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Java/Kotlin default).
    pub fn jvm() -> Self {
        Self::new(Indent::JVM)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    ///
    /// A line that is empty after trimming trailing whitespace is emitted as
    /// a bare newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let s = s.trim_end();
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line text at the current indentation (mutable).
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.split('\n') {
            self.push_line(line);
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add every line of a multi-line text at the current indentation.
    pub fn lines(mut self, text: &str) -> Self {
        self.push_lines(text);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use fencepost_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::jvm()
    ///     .block_with_close("fun validate() {", "}", |b: CodeBuilder| {
    ///         b.line("println(1)")
    ///     })
    ///     .build();
    /// assert_eq!(code, "fun validate() {\n    println(1)\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let columns = self.indent.columns(self.indent_level);
        self.buffer.extend(std::iter::repeat_n(' ', columns));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::jvm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::jvm().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::jvm()
            .line("class Foo {")
            .indent()
            .line("void bar() {}")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "class Foo {\n    void bar() {}\n}\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let code = CodeBuilder::jvm()
            .indent()
            .indent()
            .lines("a();\n   \nb();")
            .build();

        assert_eq!(code, "        a();\n\n        b();\n");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let code = CodeBuilder::jvm().line("val x = 1   ").build();
        assert_eq!(code, "val x = 1\n");
    }

    #[test]
    fn test_conditional_and_each() {
        let code = CodeBuilder::jvm()
            .when(false, |b| b.line("import a.B;"))
            .each(["import c.D;", "import e.F;"], |b, i| b.line(i))
            .build();

        assert_eq!(code, "import c.D;\nimport e.F;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::jvm();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_custom_indent() {
        let code = CodeBuilder::new(Indent::spaces(2))
            .block_with_close("{", "}", |b| b.block_with_close("{", "}", |b| b.line("x")))
            .build();
        assert_eq!(code, "{\n  {\n    x\n  }\n}\n");
    }
}
