//! List command report.

use serde::Serialize;

use super::output::{Output, Report};

/// One extracted snippet.
#[derive(Debug, Serialize)]
pub struct SnippetEntry {
    pub file: String,
    pub index: usize,
    /// Leading hex digits of the content hash.
    pub hash: String,
    pub class_name: String,
    pub lines: usize,
}

/// Snippets of one language, in validation order.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub language: &'static str,
    pub snippets: Vec<SnippetEntry>,
}

impl ListReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.snippets.is_empty() {
            out.line(&format!("No {} snippets found.", self.language));
            return;
        }

        out.section(&format!("{} snippets ({})", self.language, self.snippets.len()));
        for entry in &self.snippets {
            out.list_item(&format!(
                "{}  (snippet {})  {}  {}",
                entry.file, entry.index, entry.hash, entry.class_name
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report() -> ListReport {
        ListReport {
            language: "Java",
            snippets: vec![SnippetEntry {
                file: "docs/a.md".to_string(),
                index: 0,
                hash: "0123456789ab".to_string(),
                class_name: "Snippet_java_docs_a_md_000".to_string(),
                lines: 3,
            }],
        }
    }

    #[test]
    fn test_render() {
        let mut out = BufferOutput::default();
        report().render(&mut out);
        insta::assert_snapshot!(out.text, @r"
        Java snippets (1):
          - docs/a.md  (snippet 0)  0123456789ab  Snippet_java_docs_a_md_000
        ");
    }

    #[test]
    fn test_render_empty() {
        let mut out = BufferOutput::default();
        ListReport {
            language: "Kotlin",
            snippets: Vec::new(),
        }
        .render(&mut out);
        assert_eq!(out.text, "No Kotlin snippets found.\n");
    }

    #[test]
    fn test_json() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["language"], "Java");
        assert_eq!(json["snippets"][0]["class_name"], "Snippet_java_docs_a_md_000");
        assert_eq!(json["snippets"][0]["lines"], 3);
    }
}
