//! Parallel compiler invocation.

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use fencepost_core::{GeneratedFile, SdkVersion};
use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    ClasspathResolver, CompileError, DiagnosticParser, Toolchain, classpath::CLASSPATH_SEPARATOR,
};
use crate::{language::CompilerConvention, unit::GeneratedUnit};

/// Outcome of compiling one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitResult {
    pub class_name: String,
    /// Report lines; empty when the unit compiled
    pub errors: Vec<String>,
}

impl UnitResult {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compiles the base type, then every pending unit in its own process.
pub struct CompilerDriver<'a> {
    convention: CompilerConvention,
    toolchain: &'a Toolchain,
    classpath: &'a dyn ClasspathResolver,
    parser: DiagnosticParser,
    base_source: PathBuf,
    generated_dir: PathBuf,
    classes_dir: PathBuf,
    jobs: Option<usize>,
}

impl<'a> CompilerDriver<'a> {
    pub fn new(
        convention: CompilerConvention,
        toolchain: &'a Toolchain,
        classpath: &'a dyn ClasspathResolver,
    ) -> Result<Self, CompileError> {
        Ok(Self {
            parser: DiagnosticParser::new(convention.diagnostic_pattern)?,
            convention,
            toolchain,
            classpath,
            base_source: PathBuf::new(),
            generated_dir: PathBuf::new(),
            classes_dir: PathBuf::new(),
            jobs: None,
        })
    }

    /// Source of the shared validation base type.
    pub fn base_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_source = path.into();
        self
    }

    /// Directory the units were written to.
    pub fn generated_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.generated_dir = path.into();
        self
    }

    /// Compiler output directory, also added to the unit classpath.
    pub fn classes_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.classes_dir = path.into();
        self
    }

    /// Upper bound on concurrent compiler processes.
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Workers for `pending` units: the smallest of available parallelism,
    /// `pending` and the configured job limit, never below one.
    pub fn worker_count(&self, pending: usize) -> usize {
        let cpus = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        let limit = self.jobs.unwrap_or(usize::MAX);
        cpus.min(pending).min(limit).max(1)
    }

    /// Compile `units` against the classpath for `version`.
    ///
    /// Nothing is resolved or launched when `units` is empty. Results come
    /// back in the order of `units`.
    pub fn compile(
        &self,
        units: &[&GeneratedUnit],
        version: &SdkVersion,
    ) -> Result<Vec<UnitResult>, CompileError> {
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let sdk_classpath = self.classpath.resolve(version)?;
        std::fs::create_dir_all(&self.classes_dir).map_err(|source| CompileError::Io {
            path: self.classes_dir.clone(),
            source,
        })?;

        self.compile_base(&sdk_classpath)?;

        let classpath = format!(
            "{}{}{}",
            sdk_classpath,
            CLASSPATH_SEPARATOR,
            self.classes_dir.display()
        );
        let workers = self.worker_count(units.len());
        info!(units = units.len(), workers, "compiling snippets");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;

        pool.install(|| {
            units
                .par_iter()
                .map(|unit| {
                    let source = unit.path(&self.generated_dir);
                    let errors = self.run(&classpath, &source, &unit.file_name())?;
                    Ok(UnitResult {
                        class_name: unit.class_name.clone(),
                        errors,
                    })
                })
                .collect()
        })
    }

    fn compile_base(&self, sdk_classpath: &str) -> Result<(), CompileError> {
        if !self.base_source.is_file() {
            return Err(CompileError::MissingBase {
                path: self.base_source.clone(),
            });
        }

        let file_name = self
            .base_source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(base = %self.base_source.display(), "compiling validation base type");

        let errors = self.run(sdk_classpath, &self.base_source, &file_name)?;
        if !errors.is_empty() {
            return Err(CompileError::BaseType {
                path: self.base_source.clone(),
                errors,
            });
        }
        Ok(())
    }

    /// One compiler process; returns its error lines.
    fn run(
        &self,
        classpath: &str,
        source: &Path,
        file_name: &str,
    ) -> Result<Vec<String>, CompileError> {
        let output = self
            .toolchain
            .command()
            .args(self.convention.args(classpath, &self.classes_dir, source))
            .output()
            .map_err(|source| CompileError::Launch {
                program: self.toolchain.display(),
                source,
            })?;

        let status = output.status;
        debug!(unit = file_name, %status, "compiler finished");
        if status.success() {
            return Ok(Vec::new());
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let mut errors = self.parser.parse(&text, file_name);
        if errors.is_empty() {
            errors.push(format!("  compiler exited with {}", status));
        }
        Ok(errors)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use fencepost_core::Snippet;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        compile::StaticClasspath,
        language::LanguagePlugin,
        testing::{FakeCompiler, StubPlugin},
    };

    struct Fixture {
        temp: TempDir,
        compiler: FakeCompiler,
        toolchain: Toolchain,
        classpath: StaticClasspath,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            std::fs::create_dir_all(temp.path().join("base")).unwrap();
            std::fs::write(temp.path().join("base/Base.java"), "class Base {}\n").unwrap();
            std::fs::create_dir_all(temp.path().join("gen")).unwrap();
            let compiler = FakeCompiler::new().unwrap();
            let toolchain = compiler.toolchain();
            Self {
                temp,
                compiler,
                toolchain,
                classpath: StaticClasspath::new(["sdk.jar"]),
            }
        }

        fn driver(&self) -> CompilerDriver<'_> {
            CompilerDriver::new(*StubPlugin::new().compiler(), &self.toolchain, &self.classpath)
                .unwrap()
                .base_source(self.temp.path().join("base/Base.java"))
                .generated_dir(self.temp.path().join("gen"))
                .classes_dir(self.temp.path().join("classes"))
        }

        fn unit(&self, index: usize, content: &str) -> GeneratedUnit {
            let plugin = StubPlugin::new();
            let snippet = Snippet::new("docs/a.md", index, content);
            let unit = GeneratedUnit::new(&plugin, snippet, format!("Unit{index}"));
            unit.write(&self.temp.path().join("gen")).unwrap();
            unit
        }
    }

    fn version() -> SdkVersion {
        "1.0".parse().unwrap()
    }

    #[test]
    fn test_pass_and_failure() {
        let fixture = Fixture::new();
        let good = fixture.unit(0, "int x = 1;");
        let bad = fixture.unit(1, "BROKEN();");

        let results = fixture.driver().compile(&[&good, &bad], &version()).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].passed());
        assert_eq!(results[1].class_name, "Unit1");
        assert_eq!(results[1].errors, vec!["  line 5: cannot find symbol"]);
        // base type plus two units
        assert_eq!(fixture.compiler.invocations().len(), 3);
    }

    #[test]
    fn test_nothing_pending_launches_nothing() {
        let fixture = Fixture::new();
        std::fs::remove_file(fixture.temp.path().join("base/Base.java")).unwrap();

        let results = fixture.driver().compile(&[], &version()).unwrap();

        assert!(results.is_empty());
        assert!(fixture.compiler.invocations().is_empty());
    }

    #[test]
    fn test_missing_base_is_fatal() {
        let fixture = Fixture::new();
        std::fs::remove_file(fixture.temp.path().join("base/Base.java")).unwrap();
        let unit = fixture.unit(0, "int x = 1;");

        let err = fixture.driver().compile(&[&unit], &version()).unwrap_err();
        assert!(matches!(err, CompileError::MissingBase { .. }));
    }

    #[test]
    fn test_broken_base_is_fatal() {
        let fixture = Fixture::new();
        std::fs::write(fixture.temp.path().join("base/Base.java"), "BROKEN\n").unwrap();
        let unit = fixture.unit(0, "int x = 1;");

        match fixture.driver().compile(&[&unit], &version()) {
            Err(CompileError::BaseType { errors, .. }) => {
                assert_eq!(errors, vec!["  line 5: cannot find symbol"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        // units are never attempted
        assert_eq!(fixture.compiler.invocations().len(), 1);
    }

    #[test]
    fn test_silent_crash_is_a_failure() {
        let fixture = Fixture::new();
        let unit = fixture.unit(0, "CRASH");

        let results = fixture.driver().compile(&[&unit], &version()).unwrap();
        assert_eq!(results[0].errors, vec!["  compiler exited with exit status: 2"]);
    }

    #[test]
    fn test_worker_count_bounds() {
        let fixture = Fixture::new();
        let driver = fixture.driver();
        assert_eq!(driver.worker_count(0), 1);
        assert_eq!(driver.worker_count(1), 1);
        assert!(driver.worker_count(100) <= 100);
        assert_eq!(driver.jobs(Some(1)).worker_count(100), 1);
    }

    #[test]
    fn test_launch_failure_is_fatal() {
        let fixture = Fixture::new();
        let missing = Toolchain::new(["/nonexistent/javac"]).unwrap();
        let unit = fixture.unit(0, "int x = 1;");
        let driver = CompilerDriver::new(*StubPlugin::new().compiler(), &missing, &fixture.classpath)
            .unwrap()
            .base_source(fixture.temp.path().join("base/Base.java"))
            .generated_dir(fixture.temp.path().join("gen"))
            .classes_dir(fixture.temp.path().join("classes"));

        let err = driver.compile(&[&unit], &version()).unwrap_err();
        assert!(matches!(err, CompileError::Launch { .. }));
    }
}
