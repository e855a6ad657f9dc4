//! Suite code generation
//!
//! Renders one generated test file per suite: a header emitted once, followed by one `#[test]` stub per fixture in
//! the order the fixtures are added (the discoverer adds them sorted by file name).
//!
//! The header declares `suite_runner()`, which lazily creates the suite's shared `loxgen_runtime::SuiteRunner` and
//! hands the same `&'static` handle to each test. Stubs never reach the runner any other way.

use std::collections::HashMap;
use std::path::{Component, Path};

use super::rust_emitter::{RustEmitter, is_keyword, string_literal};
use crate::classify::Classification;
use crate::config::GeneratorConfig;
use crate::discovery::FixtureFile;
use crate::errors::{GenError, GenResult};
use crate::version::LOXGEN_VERSION;

/// Function names the generated file already uses; a fixture with one of these names gets a prefixed test name.
const RESERVED_FN_NAMES: &[&str] = &["suite_runner", "main"];

/// Prefix added to fixture names that are not usable as Rust function names on their own.
const TEST_NAME_PREFIX: &str = "fixture_";

/// Derive the test function name for a fixture base name.
///
/// ASCII letters are lowercased and every character outside `[a-z0-9_]` becomes `_`. Names that are empty after
/// mapping, start with a digit, or collide with a keyword or a function the file already defines get the `fixture_`
/// prefix.
pub fn test_name(fixture: &str) -> String {
    let mut name: String = fixture
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    let needs_prefix = name.is_empty()
        || name == "_"
        || name.starts_with(|c: char| c.is_ascii_digit())
        || is_keyword(&name)
        || RESERVED_FN_NAMES.contains(&name.as_str());
    if needs_prefix {
        name.insert_str(0, TEST_NAME_PREFIX);
    }
    name
}

/// Rust expression for the suite directory as seen from the generated test.
///
/// Relative directories are anchored at the consuming crate's manifest directory, since that is where the generator
/// is expected to run from. Absolute directories are emitted verbatim.
fn suite_dir_expr(dir: &Path) -> String {
    if dir.is_absolute() {
        return string_literal(&dir.to_string_lossy());
    }

    let relative: Vec<String> = dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if relative.is_empty() {
        "env!(\"CARGO_MANIFEST_DIR\")".to_string()
    } else {
        format!(
            "concat!(env!(\"CARGO_MANIFEST_DIR\"), {})",
            string_literal(&format!("/{}", relative.join("/")))
        )
    }
}

/// A fully rendered suite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSuite {
    pub suite: String,
    pub contents: String,
    pub positive: usize,
    pub negative: usize,
}

/// Accumulates the generated text for one suite.
pub struct SuiteCodegen<'a> {
    config: &'a GeneratorConfig,
    suite: String,
    emitter: RustEmitter,
    /// test name -> fixture file name it was derived from
    test_names: HashMap<String, String>,
    positive: usize,
    negative: usize,
}

impl<'a> SuiteCodegen<'a> {
    /// Start a suite file; the header is emitted immediately.
    pub fn new(suite: &str, dir: &Path, config: &'a GeneratorConfig) -> Self {
        let mut codegen = Self {
            config,
            suite: suite.to_string(),
            emitter: RustEmitter::new(),
            test_names: HashMap::new(),
            positive: 0,
            negative: 0,
        };
        codegen.emit_header(dir);
        codegen
    }

    fn emit_header(&mut self, dir: &Path) {
        let runner_type = self.config.runner_type.as_str();
        let runner_init = self.config.runner_init.as_str();
        let e = &mut self.emitter;

        e.comment(&format!(
            "@generated by loxgen {} from the `{}` fixture suite. Do not edit by hand.",
            LOXGEN_VERSION, self.suite
        ));
        e.inner_doc(&format!("Conformance tests for the `{}` fixture suite.", self.suite));
        e.inner_doc("");
        e.inner_doc("Each test runs one fixture script from this directory through the interpreter under test.");
        e.inner_doc("Positive tests compare printed output with the script's `// expect:` annotations; negative");
        e.inner_doc("tests only require the run to fail.");
        e.blank_line();
        e.line("use std::sync::OnceLock;");
        e.blank_line();
        e.linef(format_args!("use {}::SuiteRunner;", self.config.runtime_crate));
        e.blank_line();
        e.linef(format_args!("const SUITE_DIR: &str = {};", suite_dir_expr(dir)));
        e.blank_line();
        e.line("/// Runner shared by every test in this file: created on first use, released at process exit.");
        e.function(
            "",
            "suite_runner",
            "",
            &format!("&'static SuiteRunner<{}>", runner_type),
            |e| {
                e.linef(format_args!(
                    "static RUNNER: OnceLock<SuiteRunner<{}>> = OnceLock::new();",
                    runner_type
                ));
                e.linef(format_args!(
                    "RUNNER.get_or_init(|| SuiteRunner::new(SUITE_DIR, {}))",
                    runner_init
                ));
            },
        );
    }

    /// Emit the stub for one fixture.
    ///
    /// ## Errors
    ///
    /// `DuplicateTestName` if another fixture of this suite already produced the same test name.
    pub fn emit_fixture(&mut self, fixture: &FixtureFile, classification: &Classification) -> GenResult<()> {
        let name = test_name(&fixture.name);
        let file_name = fixture.file_name();
        if let Some(first) = self.test_names.get(&name) {
            return Err(GenError::DuplicateTestName {
                suite: self.suite.clone(),
                first: first.clone(),
                second: file_name,
                test_name: name,
            });
        }

        match classification {
            Classification::Positive { expected } => {
                self.emit_positive(&name, &file_name, expected);
                self.positive += 1;
            }
            Classification::Negative => {
                self.emit_negative(&name, &file_name);
                self.negative += 1;
            }
        }
        self.test_names.insert(name, file_name);
        Ok(())
    }

    fn emit_positive(&mut self, name: &str, file_name: &str, expected: &[String]) {
        let e = &mut self.emitter;
        e.blank_line();
        e.attribute("test");
        e.function("", name, "", "", |e| {
            e.linef(format_args!("let fixture = {};", string_literal(file_name)));
            e.line("let runner = suite_runner();");
            e.block_with_suffix("let output = match runner.run(fixture)", ";", |e| {
                e.line("Ok(output) => output,");
                e.line(r#"Err(err) => panic!("{fixture} should run cleanly but failed:\n{err}"),"#);
            });
            if expected.is_empty() {
                e.line("let expected: &[&str] = &[];");
            } else {
                e.line("let expected: &[&str] = &[");
                e.indent();
                for line in expected {
                    e.linef(format_args!("{},", string_literal(line)));
                }
                e.dedent();
                e.line("];");
            }
            e.line("assert_eq!(");
            e.indent();
            e.line("output.lines().collect::<Vec<_>>(),");
            e.line("expected,");
            e.line(r#""{fixture} printed unexpected output""#);
            e.dedent();
            e.line(");");
        });
    }

    fn emit_negative(&mut self, name: &str, file_name: &str) {
        let e = &mut self.emitter;
        e.blank_line();
        e.attribute("test");
        e.function("", name, "", "", |e| {
            e.linef(format_args!("let fixture = {};", string_literal(file_name)));
            e.line("let runner = suite_runner();");
            e.block("match runner.run(fixture)", |e| {
                e.line(r#"Ok(_) => panic!("{fixture} should fail but ran cleanly"),"#);
                e.line(r#"Err(err) => eprintln!("{fixture} failed as expected: {err}"),"#);
            });
        });
    }

    pub fn finish(self) -> RenderedSuite {
        RenderedSuite {
            suite: self.suite,
            contents: self.emitter.finish(),
            positive: self.positive,
            negative: self.negative,
        }
    }
}
