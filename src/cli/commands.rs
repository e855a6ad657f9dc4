//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::errors::GenError;
use crate::generator::{self, GenerationReport, PlannedSuite};

use super::{CliError, CliResult, ExitCode};

/// Render a generator error with its diagnostic code and help text.
fn gen_failure(err: GenError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

/// Generate every suite under `root` and print a summary.
pub fn generate_suites(root: &Path) -> CliResult<ExitCode> {
    let config = GeneratorConfig::default();
    let report = generator::generate(root, &config).map_err(gen_failure)?;
    print!("{}", format_report(&report));
    Ok(ExitCode::SUCCESS)
}

/// Print each suite and fixture classification under `root` without writing anything.
pub fn list_suites(root: &Path) -> CliResult<ExitCode> {
    let config = GeneratorConfig::default();
    let planned = generator::plan(root, &config).map_err(gen_failure)?;
    print!("{}", format_plan(&planned));
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn format_report(report: &GenerationReport) -> String {
    let mut out = String::new();
    for suite in &report.written {
        let _ = writeln!(
            out,
            "wrote {} ({} positive, {} negative)",
            suite.path.display(),
            suite.positive,
            suite.negative
        );
    }
    for name in &report.skipped {
        let _ = writeln!(out, "skipped {} (excluded)", name);
    }
    let _ = writeln!(
        out,
        "generated {} suite file(s) with {} test(s)",
        report.written.len(),
        report.total_tests()
    );
    out
}

pub(crate) fn format_plan(planned: &[PlannedSuite]) -> String {
    let mut out = String::new();
    for entry in planned {
        match &entry.output {
            None => {
                let _ = writeln!(out, "{} (excluded)", entry.suite.name);
            }
            Some(path) => {
                let _ = writeln!(out, "{} -> {}", entry.suite.name, path.display());
                for fixture in &entry.fixtures {
                    let _ = writeln!(out, "  {}: {}", fixture.fixture.file_name(), fixture.classification);
                }
            }
        }
    }
    out
}
