//! Clean command report data structures.

use super::output::{Output, Report};

/// What the clean operation deleted.
#[derive(Debug)]
pub struct CleanReport {
    pub language: &'static str,
    /// Number of generated sources deleted.
    pub sources: usize,
    /// Deleted directories and files other than sources.
    pub removed: Vec<String>,
}

impl CleanReport {
    /// Whether nothing was there to delete.
    pub fn is_empty(&self) -> bool {
        self.sources == 0 && self.removed.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.is_empty() {
            out.line(&format!("No {} build state found.", self.language));
            return;
        }

        out.section("Deleted");
        if self.sources > 0 {
            out.removed_item(&format!(
                "{} generated {} source{}",
                self.sources,
                self.language,
                if self.sources == 1 { "" } else { "s" }
            ));
        }
        for path in &self.removed {
            out.removed_item(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let mut out = BufferOutput::default();
        CleanReport {
            language: "Kotlin",
            sources: 2,
            removed: vec!["validation/cache/snippet-kotlin-cache.json".to_string()],
        }
        .render(&mut out);
        insta::assert_snapshot!(out.text, @r"
        Deleted:
          - 2 generated Kotlin sources
          - validation/cache/snippet-kotlin-cache.json
        ");
    }
}
