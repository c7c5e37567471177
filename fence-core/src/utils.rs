//! Shared string utilities.

use sha2::{Digest, Sha256};

/// Turn arbitrary text into an identifier-safe slug.
///
/// Every character that is not an ASCII letter or digit becomes `_`, runs of
/// `_` collapse to one, and leading/trailing `_` are trimmed
/// (e.g. "docs/sdks/get-started.md" -> "docs_sdks_get_started_md").
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// First 8 hex digits of the SHA-256 of `s`.
pub fn short_digest(s: &str) -> String {
    let digest = hex::encode(Sha256::digest(s.as_bytes()));
    digest[..8].to_string()
}

/// Render a relative path with forward slashes so identities are stable
/// across platforms.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("docs/sdks/android/get-started.md"),
            "docs_sdks_android_get_started_md"
        );
        assert_eq!(slugify("__a//b__"), "a_b");
        assert_eq!(slugify("a_b"), "a_b");
        assert_eq!(slugify("a-b"), "a_b");
        assert_eq!(slugify("été.md"), "t_md");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_short_digest() {
        assert_eq!(short_digest(""), "e3b0c442");
        assert_eq!(short_digest("a-b.md").len(), 8);
        assert_ne!(short_digest("a-b.md"), short_digest("a_b.md"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("docs\\a\\b.md"), "docs/a/b.md");
        assert_eq!(normalize_path("docs/a.md"), "docs/a.md");
    }
}
