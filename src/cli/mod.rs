//! CLI module for loxgen
//!
//! ## Commands
//!
//! - `generate [ROOT]` - Write `<suite>_test.rs` into every non-excluded suite directory (default action)
//! - `list [ROOT]` - Print suites and fixture classifications without writing
//!
//! `ROOT` defaults to `tests/test_files`.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::LOXGEN_VERSION;

/// Fixture root used when none is given on the command line.
pub const DEFAULT_ROOT: &str = "tests/test_files";

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate Rust test suites from annotated Lox fixtures
#[derive(Parser, Debug)]
#[command(name = "loxgen")]
#[command(version = LOXGEN_VERSION)]
#[command(about = "Generate Rust test suites from annotated Lox fixtures", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Fixture root to generate from (default action when no subcommand given)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one test file per suite
    Generate {
        /// Directory containing the fixture suites
        #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
        root: PathBuf,
    },

    /// Show suites and fixture classifications without writing
    List {
        /// Directory containing the fixture suites
        #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
        root: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Generate { root }) => commands::generate_suites(&root),
        Some(Command::List { root }) => commands::list_suites(&root),
        None => {
            let root = cli.root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
            commands::generate_suites(&root)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
