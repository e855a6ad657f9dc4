//! Run fixtures by spawning an interpreter executable.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::runner::FixtureRunner;

/// Errors reported by [`CommandRunner`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to start interpreter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} exited with {status}\n{stderr}")]
    Failed {
        path: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

/// Runs `<program> [args..] <fixture path>` and treats a zero exit status as a clean run.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument placed before the fixture path (e.g. an interpreter flag).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl FixtureRunner for CommandRunner {
    type Error = RunError;

    fn run_file(&mut self, path: &Path) -> Result<String, RunError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|source| RunError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if output.status.success() {
            Ok(stdout)
        } else {
            Err(RunError::Failed {
                path: path.display().to_string(),
                status: output.status,
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}
