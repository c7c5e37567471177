use std::path::PathBuf;

use thiserror::Error;

/// Environment failures that abort a run.
///
/// Compiler diagnostics in a snippet are not errors at this level; they are
/// per-unit results.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to run classpath command `{command}`")]
    ClasspathLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("classpath command `{command}` exited with {status}\n{stderr}")]
    ClasspathCommand {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("failed to read classpath from '{}'", path.display())]
    ClasspathOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the resolved classpath is empty")]
    EmptyClasspath,

    #[error("validation base type not found at '{}'", path.display())]
    MissingBase { path: PathBuf },

    #[error("validation base type '{}' failed to compile:\n{}", path.display(), errors.join("\n"))]
    BaseType { path: PathBuf, errors: Vec<String> },

    #[error("failed to launch compiler `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid diagnostic pattern")]
    Pattern(#[from] regex::Error),

    #[error("failed to start compiler worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to prepare '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
