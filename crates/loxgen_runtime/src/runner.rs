//! The fixture runner capability and the suite-scoped handle generated tests share.
//!
//! ## Lifecycle
//!
//! A generated suite acquires exactly one [`SuiteRunner`] the first time any of its tests runs and passes a
//! `&'static` reference to every test. The handle is released when the test process exits.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Execute a fixture and capture what it printed.
///
/// Implementations return the captured standard output on a clean run and an error value when the interpreter
/// reports a compile or runtime failure.
pub trait FixtureRunner {
    type Error: Display;

    fn run_file(&mut self, path: &Path) -> Result<String, Self::Error>;
}

/// Shared runner handle for one suite directory.
#[derive(Debug)]
pub struct SuiteRunner<R> {
    dir: PathBuf,
    runner: Mutex<R>,
}

impl<R: FixtureRunner> SuiteRunner<R> {
    pub fn new(dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            dir: dir.into(),
            runner: Mutex::new(runner),
        }
    }

    /// Resolve a fixture file name (`closure.lox`) to its script path.
    pub fn fixture_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Run the fixture `file_name` from this suite's directory.
    ///
    /// Calls are serialised: libtest runs tests on several threads but the interpreter handle is single-user. A
    /// test that panicked while holding the lock does not poison the suite for the remaining tests.
    pub fn run(&self, file_name: &str) -> Result<String, R::Error> {
        let path = self.fixture_path(file_name);
        let mut runner = self.runner.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(fixture = %path.display(), "running fixture");
        runner.run_file(&path)
    }
}
