//! SDK classpath resolution.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use fencepost_core::SdkVersion;
use fencepost_manifest::ClasspathConfig;
use tracing::{debug, info};

use super::CompileError;

/// Platform classpath separator.
pub(crate) const CLASSPATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Resolves the compile classpath for an SDK version.
pub trait ClasspathResolver: Send + Sync {
    /// Return the classpath string for `version`. Failure aborts the run.
    fn resolve(&self, version: &SdkVersion) -> Result<String, CompileError>;
}

/// A fixed list of classpath entries.
#[derive(Debug, Clone, Default)]
pub struct StaticClasspath {
    entries: Vec<String>,
}

impl StaticClasspath {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

impl ClasspathResolver for StaticClasspath {
    fn resolve(&self, _version: &SdkVersion) -> Result<String, CompileError> {
        join_entries(self.entries.iter().map(String::as_str))
    }
}

/// Runs an external command (e.g. a Gradle task) to export the classpath.
///
/// Every `{version}` in the command is replaced by the SDK version. The
/// classpath is read from `output` when set, otherwise from stdout; the
/// static entries are appended.
#[derive(Debug, Clone)]
pub struct CommandClasspath {
    command: Vec<String>,
    cwd: PathBuf,
    output: Option<PathBuf>,
    entries: Vec<String>,
}

impl CommandClasspath {
    pub fn new(command: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command,
            cwd: cwd.into(),
            output: None,
            entries: Vec::new(),
        }
    }

    /// Read the classpath from this file instead of stdout.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Append these entries after the exported ones.
    pub fn entries(mut self, entries: Vec<String>) -> Self {
        self.entries = entries;
        self
    }

    fn command_line(&self, version: &SdkVersion) -> Vec<String> {
        self.command
            .iter()
            .map(|part| part.replace("{version}", version.as_str()))
            .collect()
    }
}

impl ClasspathResolver for CommandClasspath {
    fn resolve(&self, version: &SdkVersion) -> Result<String, CompileError> {
        let command = self.command_line(version);
        let shown = command.join(" ");
        let Some((program, args)) = command.split_first() else {
            return Err(CompileError::EmptyClasspath);
        };

        info!(command = %shown, "exporting SDK classpath");
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|source| CompileError::ClasspathLaunch {
                command: shown.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CompileError::ClasspathCommand {
                command: shown,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw = match &self.output {
            Some(path) => {
                std::fs::read_to_string(path).map_err(|source| CompileError::ClasspathOutput {
                    path: path.clone(),
                    source,
                })?
            }
            None => String::from_utf8_lossy(&output.stdout).into_owned(),
        };
        debug!(bytes = raw.len(), "classpath exported");

        let exported = raw.trim().split(CLASSPATH_SEPARATOR);
        join_entries(exported.chain(self.entries.iter().map(String::as_str)))
    }
}

/// Build the resolver described by `[classpath]`. Relative paths resolve
/// against `root`.
pub fn resolver_from_config(config: &ClasspathConfig, root: &Path) -> Box<dyn ClasspathResolver> {
    match &config.command {
        Some(command) => {
            let cwd = config
                .cwd
                .as_ref()
                .map_or_else(|| root.to_path_buf(), |cwd| root.join(cwd));
            let mut resolver = CommandClasspath::new(command.get_ref().clone(), cwd)
                .entries(config.entries.clone());
            if let Some(output) = &config.output {
                resolver = resolver.output(root.join(output));
            }
            Box::new(resolver)
        }
        None => Box::new(StaticClasspath::new(config.entries.clone())),
    }
}

fn join_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Result<String, CompileError> {
    let entries: Vec<&str> = entries
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.is_empty() {
        return Err(CompileError::EmptyClasspath);
    }
    Ok(entries.join(CLASSPATH_SEPARATOR))
}
