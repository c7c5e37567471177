//! Test utilities for the validation pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. [`FakeCompiler`] is a `sh` script standing in for
//! `javac`/`kotlinc`, so end-to-end runs need no JDK:
//!
//! - a source containing `CRASH` exits 2 without output
//! - a source containing `BROKEN` exits 1 with one diagnostic at line 5
//! - anything else compiles

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, eyre};
use fencepost_core::{Snippet, SdkVersion, write_file};
use fencepost_manifest::{Language, LanguageSettings, PathsConfig};
use tempfile::TempDir;

use crate::{
    compile::{StaticClasspath, Toolchain},
    language::{CompilerConvention, LanguagePlugin},
    pipeline::{ValidateOptions, ValidationContext},
};

const FAKE_COMPILER: &str = r#"#!/bin/sh
for last; do :; done
printf '%s\n' "${last##*/}" >> '{log}'
if grep -q CRASH "$last"; then
    exit 2
fi
if grep -q BROKEN "$last"; then
    case "$last" in
        *.kt) echo "$last:5:9: error: unresolved reference: BROKEN" ;;
        *) echo "$last:5: error: cannot find symbol" >&2 ;;
    esac
    exit 1
fi
exit 0
"#;

/// A scripted compiler that logs every source it is asked to compile.
#[derive(Debug)]
pub struct FakeCompiler {
    dir: TempDir,
}

impl FakeCompiler {
    pub fn new() -> Result<Self> {
        let compiler = Self {
            dir: TempDir::new()?,
        };
        let script = FAKE_COMPILER.replace("{log}", &compiler.log().display().to_string());
        write_file(&compiler.script(), &script)?;
        Ok(compiler)
    }

    fn script(&self) -> PathBuf {
        self.dir.path().join("compiler.sh")
    }

    fn log(&self) -> PathBuf {
        self.dir.path().join("invocations.log")
    }

    /// `sh <script>`; running through `sh` avoids exec permission bits.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain::from_parts("sh", [self.script()])
    }

    /// The same command as a `compiler` override for `fence.toml`.
    pub fn command_line(&self) -> Vec<String> {
        vec!["sh".to_string(), self.script().display().to_string()]
    }

    /// File names compiled so far, in invocation order.
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Invocations for generated units, leaving out the base type.
    pub fn unit_invocations(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .filter(|name| name.starts_with("Snippet_"))
            .collect()
    }
}

const STUB_CONVENTION: CompilerConvention = CompilerConvention {
    binary: "javac",
    home_var: "JAVA_HOME",
    extra_args: &[],
    diagnostic_pattern: r"([^\s:]+\.java):(\d+):\s*error:\s*(.+)",
};

/// A minimal Java plugin that wraps the body without any source transforms.
#[derive(Debug, Clone)]
pub struct StubPlugin {
    settings: LanguageSettings,
}

impl StubPlugin {
    pub fn new() -> Self {
        Self {
            settings: LanguageSettings::defaults(Language::Java),
        }
    }
}

impl Default for StubPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for StubPlugin {
    fn language(&self) -> Language {
        Language::Java
    }

    fn settings(&self) -> &LanguageSettings {
        &self.settings
    }

    fn compiler(&self) -> &CompilerConvention {
        &STUB_CONVENTION
    }

    fn wrap(&self, class_name: &str, snippet: &Snippet) -> String {
        format!(
            "package {};\n\npublic class {} extends {} {{\n    void validate() {{\n{}\n    }}\n}}\n",
            self.settings.package,
            class_name,
            self.settings.base_class,
            snippet.content()
        )
    }
}

/// A throwaway repository: docs, default base sources and a fake compiler.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    compiler: FakeCompiler,
}

impl Workspace {
    /// A repository with `docs/` and both default base sources in place.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        for language in Language::ALL {
            let settings = LanguageSettings::defaults(language);
            write_file(
                &dir.path().join(&settings.base_source),
                &format!("// {} base\n", settings.base_class),
            )?;
        }
        std::fs::create_dir_all(dir.path().join("docs"))?;
        Ok(Self {
            dir,
            compiler: FakeCompiler::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn compiler(&self) -> &FakeCompiler {
        &self.compiler
    }

    /// Write a document (or any file) relative to the root.
    pub fn doc(&self, path: &str, content: &str) -> Result<()> {
        write_file(&self.root().join(path), content)
    }

    /// Read a file relative to the root.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = self.root().join(path);
        std::fs::read_to_string(&path).wrap_err_with(|| format!("failed to read {}", path.display()))
    }

    /// Normal-mode options over `docs/` with the default paths, SDK `1.0`.
    pub fn options(&self, language: Language) -> Result<ValidateOptions> {
        let paths = PathsConfig::default().resolve(self.root(), language);
        let version: SdkVersion = "1.0".parse().map_err(|e: String| eyre!(e))?;
        Ok(ValidateOptions::new(self.root(), paths, version).docs(["docs"]))
    }

    /// A context for `plugin` with [`Workspace::options`].
    pub fn context_for(&self, plugin: impl LanguagePlugin + 'static) -> Result<ValidationContext> {
        let options = self.options(plugin.language())?;
        Ok(self.context_with(plugin, options))
    }

    /// A context for `plugin` with explicit options.
    pub fn context_with(
        &self,
        plugin: impl LanguagePlugin + 'static,
        options: ValidateOptions,
    ) -> ValidationContext {
        ValidationContext::new(
            Box::new(plugin),
            Box::new(StaticClasspath::new(["fake-sdk.jar"])),
            self.compiler.toolchain(),
            options,
        )
    }

    /// A context for [`StubPlugin`].
    pub fn context(&self) -> Result<ValidationContext> {
        self.context_for(StubPlugin::new())
    }
}
