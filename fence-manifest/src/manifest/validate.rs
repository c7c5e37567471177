//! Semantic checks run after deserialization.

use regex::Regex;

use super::{Language, Manifest};
use crate::{Result, error::SourceContext};

/// Reserved words of Java and hard keywords of Kotlin. A package segment or
/// base class name using one of these cannot compile in either language.
pub(crate) const JVM_KEYWORDS: &[&str] = &[
    // Java
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null",
    // Kotlin hard keywords not already listed
    "as", "fun", "in", "is", "object", "typealias", "typeof", "val", "var", "when",
];

pub(crate) fn is_jvm_keyword(name: &str) -> bool {
    JVM_KEYWORDS.contains(&name)
}

/// Validate that a name is a simple JVM identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers and underscores");
    }

    if is_jvm_keyword(name) {
        return Some("name is a reserved keyword");
    }

    None
}

/// Validate a dotted name such as a package or an import.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_qualified_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    name.split('.').find_map(|segment| {
        if segment.is_empty() {
            Some("name cannot contain empty segments")
        } else {
            validate_identifier(segment)
        }
    })
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let docs = &manifest.project.docs;
    if docs.get_ref().is_empty() {
        return Err(ctx.validation_error_at(
            "project.docs must list at least one documentation root",
            docs.span(),
        ));
    }

    validate_sdk(manifest, ctx)?;

    if let Some(command) = &manifest.classpath.command
        && command.get_ref().is_empty()
    {
        return Err(ctx.validation_error_at("classpath.command cannot be empty", command.span()));
    }

    for language in Language::ALL {
        if let Some(config) = manifest.language_config(language) {
            let section = language.as_str();

            if let Some(package) = &config.package
                && let Some(reason) = validate_qualified_name(package.get_ref())
            {
                return Err(ctx.invalid_name_error(
                    format!("{}.package", section),
                    package.get_ref(),
                    reason,
                    Some(package.span().into()),
                ));
            }

            if let Some(base_class) = &config.base_class
                && let Some(reason) = validate_identifier(base_class.get_ref())
            {
                return Err(ctx.invalid_name_error(
                    format!("{}.base_class", section),
                    base_class.get_ref(),
                    reason,
                    Some(base_class.span().into()),
                ));
            }

            for import in config.imports.iter().flatten() {
                let name = import.get_ref();
                let bare = name.strip_suffix(".*").unwrap_or(name);
                if let Some(reason) = validate_qualified_name(bare) {
                    return Err(ctx.invalid_name_error(
                        format!("{}.imports entry", section),
                        name,
                        reason,
                        Some(import.span().into()),
                    ));
                }
            }

            if let Some(compiler) = &config.compiler
                && compiler.get_ref().is_empty()
            {
                return Err(ctx.validation_error_at(
                    format!("{}.compiler cannot be empty", section),
                    compiler.span(),
                ));
            }
        }
    }

    Ok(())
}

fn validate_sdk(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let sdk = &manifest.sdk;
    match (&sdk.version, &sdk.from) {
        (Some(_), Some(_)) => Err(ctx.validation_error(
            "[sdk] must set exactly one of 'version' or 'from', not both",
        )),
        (None, None) => Err(ctx.validation_error("[sdk] must set either 'version' or 'from'")),
        (Some(version), None) => super::sdk::parse_version(version.get_ref())
            .map(|_| ())
            .map_err(|e| ctx.validation_error_at(e.to_string(), version.span())),
        (None, Some(from)) => {
            let Some(pattern) = &from.pattern else {
                return Ok(());
            };
            match Regex::new(pattern.get_ref()) {
                Ok(regex) if regex.captures_len() > 1 => Ok(()),
                Ok(_) => Err(ctx.invalid_pattern_error(
                    pattern.get_ref(),
                    "pattern has no capture group",
                    pattern.span(),
                )),
                Err(e) => Err(ctx.invalid_pattern_error(
                    pattern.get_ref(),
                    e.to_string(),
                    pattern.span(),
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    fn parse(extra: &str) -> Result<Manifest> {
        Manifest::from_str(&format!("[project]\ndocs = [\"docs\"]\n\n{}", extra))
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("ValidationBase").is_none());
        assert!(validate_identifier("_hidden").is_none());
        assert!(validate_identifier("Base2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2Base").is_some());
        assert!(validate_identifier("Base-Class").is_some());
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("fun").is_some());
    }

    #[test]
    fn test_qualified_names() {
        assert!(validate_qualified_name("com.scandit.validation").is_none());
        assert!(validate_qualified_name("com..validation").is_some());
        assert!(validate_qualified_name("com.1bad").is_some());
        assert!(validate_qualified_name("com.package.x").is_some());
        assert!(validate_qualified_name("").is_some());
    }

    #[test]
    fn test_empty_docs() {
        let err = Manifest::from_str("[project]\ndocs = []\n\n[sdk]\nversion = \"1.0\"\n")
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_sdk_needs_exactly_one_source() {
        let both = parse("[sdk]\nversion = \"1.0\"\nfrom = { file = \"a.ts\" }\n").unwrap_err();
        assert!(matches!(*both, Error::Validation { .. }));

        let neither = parse("[sdk]\n").unwrap_err();
        assert!(matches!(*neither, Error::Validation { .. }));
    }

    #[test]
    fn test_blank_sdk_version() {
        let err = parse("[sdk]\nversion = \" \"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_pattern_must_capture() {
        let err = parse("[sdk]\nfrom = { file = \"a.ts\", pattern = \"label: \\\\S+\" }\n")
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidPattern { .. }));

        let err = parse("[sdk]\nfrom = { file = \"a.ts\", pattern = \"(unclosed\" }\n")
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidPattern { .. }));

        assert!(parse("[sdk]\nfrom = { file = \"a.ts\", pattern = \"v=(\\\\S+)\" }\n").is_ok());
    }

    #[test]
    fn test_invalid_package_points_at_value() {
        let src = "[project]\ndocs = [\"docs\"]\n\n[sdk]\nversion = \"1.0\"\n\n[java]\npackage = \"com.1bad\"\n";
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::InvalidName { span, key, .. } => {
                assert_eq!(key, "java.package");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"com.1bad\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_base_class() {
        let err = parse("[sdk]\nversion = \"1.0\"\n\n[kotlin]\nbase_class = \"object\"\n")
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_wildcard_import_allowed() {
        assert!(parse("[sdk]\nversion = \"1.0\"\n\n[kotlin]\nimports = [\"kotlinx.coroutines.*\"]\n").is_ok());
        let err = parse("[sdk]\nversion = \"1.0\"\n\n[java]\nimports = [\"java..util\"]\n")
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_empty_commands() {
        let err = parse("[sdk]\nversion = \"1.0\"\n\n[classpath]\ncommand = []\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));

        let err = parse("[sdk]\nversion = \"1.0\"\n\n[java]\ncompiler = []\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
