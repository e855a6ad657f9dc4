//! Error types for suite generation.
//!
//! Every variant is fatal to the run: generation is a one-shot batch and a failed run is simply rerun once the cause
//! is fixed. Partially written output is left in place.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error raised while discovering, rendering or writing suites.
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("fixture root '{}' does not exist or is not a directory", path.display())]
    #[diagnostic(code(loxgen::root_not_found), help("pass the directory that contains one subdirectory per suite"))]
    RootNotFound { path: PathBuf },

    #[error("failed to read directory '{}': {source}", path.display())]
    #[diagnostic(code(loxgen::read_dir))]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read fixture '{}': {source}", path.display())]
    #[diagnostic(
        code(loxgen::read_fixture),
        help("an unreadable fixture would silently drop its test; fix or remove the file and rerun")
    )]
    ReadFixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    #[diagnostic(code(loxgen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixtures '{first}' and '{second}' in suite '{suite}' both map to test `{test_name}`")]
    #[diagnostic(code(loxgen::duplicate_test_name), help("rename one of the fixtures"))]
    DuplicateTestName {
        suite: String,
        first: String,
        second: String,
        test_name: String,
    },
}

/// Result alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;
