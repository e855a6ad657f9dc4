//! Generator configuration
//!
//! Every knob here is a compile-time default; the CLI exposes none of them. Changing which suites are generated
//! is a code change, not a flag.

/// Suites the generator never covers (non-conformance categories of the fixture corpus).
pub const DEFAULT_EXCLUDED_SUITES: &[&str] = &["benchmark", "expressions", "limit", "scanning"];

/// Extension of fixture scripts, without the dot.
pub const DEFAULT_FIXTURE_EXTENSION: &str = "lox";

/// Suffix appended to the suite name to form the generated file name.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_test.rs";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fixture file extension (without the dot)
    pub fixture_extension: String,
    /// Suite (directory) names that produce no generated file
    pub excluded_suites: Vec<String>,
    /// Generated file name is `<suite><output_suffix>`
    pub output_suffix: String,
    /// Crate the generated code imports `SuiteRunner` from
    pub runtime_crate: String,
    /// Path of the `FixtureRunner` type the generated suite shares between its tests
    pub runner_type: String,
    /// Rust expression constructing that runner inside the generated accessor
    pub runner_init: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fixture_extension: DEFAULT_FIXTURE_EXTENSION.to_string(),
            excluded_suites: DEFAULT_EXCLUDED_SUITES.iter().map(|s| s.to_string()).collect(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            runtime_crate: "loxgen_runtime".to_string(),
            runner_type: "loxgen_runtime::CommandRunner".to_string(),
            runner_init: r#"loxgen_runtime::CommandRunner::new(env!("CARGO_BIN_EXE_lox"))"#.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixture extension
    pub fn with_fixture_extension(mut self, extension: &str) -> Self {
        self.fixture_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Replace the exclusion list
    pub fn with_excluded_suites<I, S>(mut self, suites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_suites = suites.into_iter().map(Into::into).collect();
        self
    }

    /// Set the runner type and the expression that builds it in generated code
    pub fn with_runner(mut self, runner_type: &str, init: &str) -> Self {
        self.runner_type = runner_type.to_string();
        self.runner_init = init.to_string();
        self
    }

    pub fn is_excluded(&self, suite: &str) -> bool {
        self.excluded_suites.iter().any(|s| s == suite)
    }

    /// File name of the generated test file for `suite`.
    pub fn output_file_name(&self, suite: &str) -> String {
        format!("{}{}", suite, self.output_suffix)
    }
}
