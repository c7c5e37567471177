//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, JSON, etc).
pub trait Output {
    /// Render a title framed by rules.
    fn banner(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render one line of text as is.
    fn line(&mut self, text: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a removed item (e.g., deleted file).
    fn removed_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Width of the rules around a banner.
const RULE_WIDTH: usize = 60;

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn banner(&mut self, text: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("{}", rule);
        println!("{}", text);
        println!("{}", rule);
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn removed_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered text, warnings included, for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub text: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn banner(&mut self, text: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.text.push_str(&format!("{}\n{}\n{}\n", rule, text, rule));
    }

    fn section(&mut self, name: &str) {
        self.text.push_str(&format!("{}:\n", name));
    }

    fn line(&mut self, text: &str) {
        self.text.push_str(&format!("{}\n", text));
    }

    fn list_item(&mut self, text: &str) {
        self.text.push_str(&format!("  - {}\n", text));
    }

    fn removed_item(&mut self, text: &str) {
        self.text.push_str(&format!("  - {}\n", text));
    }

    fn warning(&mut self, msg: &str) {
        self.text.push_str(&format!("warning: {}\n", msg));
    }

    fn newline(&mut self) {
        self.text.push('\n');
    }
}
