//! Generation pipeline
//!
//! discover suites -> classify each fixture -> render one file per suite -> write it into the suite directory.
//!
//! A fatal error anywhere stops the run. Files already written by that point stay on disk; rerunning regenerates
//! all of them.

use std::path::{Path, PathBuf};

use crate::backend::{GeneratedFile, RenderedSuite, SuiteCodegen};
use crate::classify::{Classification, classify_source};
use crate::config::GeneratorConfig;
use crate::discovery::{FixtureFile, Suite, discover_suites};
use crate::errors::GenResult;

/// A fixture paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFixture {
    pub fixture: FixtureFile,
    pub classification: Classification,
}

/// A suite and what generation would do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSuite {
    pub suite: Suite,
    /// `None` for excluded suites
    pub output: Option<PathBuf>,
    pub fixtures: Vec<PlannedFixture>,
}

/// Summary of one written suite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub name: String,
    pub path: PathBuf,
    pub positive: usize,
    pub negative: usize,
}

/// Outcome of a full generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// In discovery order
    pub written: Vec<SuiteReport>,
    /// Names of excluded suites, in discovery order
    pub skipped: Vec<String>,
}

impl GenerationReport {
    pub fn total_tests(&self) -> usize {
        self.written.iter().map(|s| s.positive + s.negative).sum()
    }
}

/// Render the generated test file for `suite` without touching the filesystem.
///
/// ## Errors
///
/// `DuplicateTestName` if two fixtures of the suite map to the same test name.
pub fn render_suite(suite: &Suite, config: &GeneratorConfig) -> GenResult<RenderedSuite> {
    let mut codegen = SuiteCodegen::new(&suite.name, &suite.dir, config);
    for fixture in &suite.fixtures {
        let classification = classify_source(&fixture.source);
        tracing::trace!(fixture = %fixture.path.display(), %classification, "classified fixture");
        codegen.emit_fixture(fixture, &classification)?;
    }
    Ok(codegen.finish())
}

/// Discover and classify everything under `root` without writing anything.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn plan(root: &Path, config: &GeneratorConfig) -> GenResult<Vec<PlannedSuite>> {
    let suites = discover_suites(root, config)?;
    Ok(suites
        .into_iter()
        .map(|suite| {
            let output = (!suite.excluded).then(|| suite.dir.join(config.output_file_name(&suite.name)));
            let fixtures = suite
                .fixtures
                .iter()
                .map(|fixture| PlannedFixture {
                    fixture: fixture.clone(),
                    classification: classify_source(&fixture.source),
                })
                .collect();
            PlannedSuite {
                suite,
                output,
                fixtures,
            }
        })
        .collect())
}

/// Generate `<suite>_test.rs` for every non-excluded suite under `root`.
///
/// Existing generated files are overwritten unconditionally. Running twice over an unchanged tree produces
/// byte-identical output.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn generate(root: &Path, config: &GeneratorConfig) -> GenResult<GenerationReport> {
    let suites = discover_suites(root, config)?;
    let mut report = GenerationReport::default();

    for suite in &suites {
        if suite.excluded {
            tracing::info!(suite = %suite.name, "skipping excluded suite");
            report.skipped.push(suite.name.clone());
            continue;
        }
        if suite.fixtures.is_empty() {
            tracing::warn!(suite = %suite.name, dir = %suite.dir.display(), "suite has no fixtures");
        }

        let rendered = render_suite(suite, config)?;
        let file = GeneratedFile::new(suite.dir.join(config.output_file_name(&suite.name)), rendered);
        file.write()?;

        tracing::info!(
            suite = %suite.name,
            path = %file.path.display(),
            positive = file.rendered.positive,
            negative = file.rendered.negative,
            "generated suite"
        );
        report.written.push(SuiteReport {
            name: file.rendered.suite,
            path: file.path,
            positive: file.rendered.positive,
            negative: file.rendered.negative,
        });
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_render_suite_counts() {
        let dir = tempfile::tempdir().unwrap();
        let suite_dir = dir.path().join("closure");
        write(&suite_dir.join("a.lox"), "print 1; // expect: 1\n");
        write(&suite_dir.join("b.lox"), "fun f( // Error at end: Expect ')'.\n");
        write(&suite_dir.join("c.lox"), "// nothing expected\n");

        let suites = discover_suites(dir.path(), &GeneratorConfig::default()).unwrap();
        let closure = suites.iter().find(|s| s.name == "closure").unwrap();
        let rendered = render_suite(closure, &GeneratorConfig::default()).unwrap();
        assert_eq!((rendered.positive, rendered.negative), (2, 1));
        assert_eq!(rendered.suite, "closure");
    }

    #[test]
    fn test_plan_marks_excluded_suites() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("benchmark/fib.lox"), "print 1; // expect: 1\n");
        write(&dir.path().join("while/loop.lox"), "// [line 2] Error at 'x': bad\n");

        let planned = plan(dir.path(), &GeneratorConfig::default()).unwrap();
        let benchmark = planned.iter().find(|p| p.suite.name == "benchmark").unwrap();
        assert!(benchmark.output.is_none());
        assert!(benchmark.fixtures.is_empty());

        let while_suite = planned.iter().find(|p| p.suite.name == "while").unwrap();
        assert_eq!(while_suite.output, Some(dir.path().join("while").join("while_test.rs")));
        assert_eq!(while_suite.fixtures.len(), 1);
        assert!(while_suite.fixtures[0].classification.is_negative());

        // plan never writes
        assert!(!dir.path().join("while/while_test.rs").exists());
    }

    #[test]
    fn test_generate_writes_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("scanning/identifiers.lox"), "andy; // expect: andy\n");
        write(&dir.path().join("string/literals.lox"), "print \"a\"; // expect: a\n");

        let report = generate(dir.path(), &GeneratorConfig::default()).unwrap();
        assert_eq!(report.skipped, vec!["scanning".to_string()]);
        assert!(!dir.path().join("scanning/scanning_test.rs").exists());

        let string = report.written.iter().find(|s| s.name == "string").unwrap();
        assert_eq!(string.path, dir.path().join("string/string_test.rs"));
        assert_eq!((string.positive, string.negative), (1, 0));
        assert!(fs::read_to_string(&string.path).unwrap().contains("fn literals() {"));
        assert_eq!(report.total_tests(), 1);
    }

    #[test]
    fn test_generate_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate(&dir.path().join("missing"), &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, crate::errors::GenError::RootNotFound { .. }));
    }
}
