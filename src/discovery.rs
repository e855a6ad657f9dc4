//! Suite discovery
//!
//! Walks the fixture tree and groups fixture files by their parent directory. Every directory is a suite named after
//! itself, the root included, and nested directories are independent suites. Exclusion is decided per directory name
//! only: the children of an excluded directory are still visited.
//!
//! Order is fully deterministic: directories are visited depth-first with siblings sorted by name, and fixtures
//! within a suite are sorted by file name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::errors::{GenError, GenResult};

/// One fixture script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    /// Name of the suite (parent directory) the fixture belongs to
    pub suite: String,
    /// File name without extension
    pub name: String,
    pub path: PathBuf,
    /// Raw script text
    pub source: String,
}

impl FixtureFile {
    /// File name including the extension, as passed to the runner (`closure.lox`).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// A directory of fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    pub name: String,
    pub dir: PathBuf,
    /// Excluded suites are reported but never read or generated
    pub excluded: bool,
    /// Sorted by file name
    pub fixtures: Vec<FixtureFile>,
}

/// Discover every suite under `root` (including `root` itself).
///
/// ## Errors
///
/// - `RootNotFound` if `root` is missing or not a directory
/// - `ReadDir` if any directory in the tree cannot be listed
/// - `ReadFixture` if a fixture in a non-excluded suite cannot be read
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn discover_suites(root: &Path, config: &GeneratorConfig) -> GenResult<Vec<Suite>> {
    if !root.is_dir() {
        return Err(GenError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut suites = Vec::new();
    visit_dir(root, config, &mut suites)?;
    Ok(suites)
}

fn visit_dir(dir: &Path, config: &GeneratorConfig, suites: &mut Vec<Suite>) -> GenResult<()> {
    let (mut subdirs, mut files) = list_dir(dir)?;
    subdirs.sort();
    files.sort();

    let name = suite_name(dir);
    let excluded = config.is_excluded(&name);

    let fixtures = if excluded {
        tracing::debug!(suite = %name, "suite excluded");
        Vec::new()
    } else {
        files
            .iter()
            .filter(|path| has_extension(path, &config.fixture_extension))
            .map(|path| load_fixture(&name, path))
            .collect::<GenResult<Vec<_>>>()?
    };

    suites.push(Suite {
        name,
        dir: dir.to_path_buf(),
        excluded,
        fixtures,
    });

    for subdir in &subdirs {
        visit_dir(subdir, config, suites)?;
    }
    Ok(())
}

/// Split a directory listing into (subdirectories, files).
fn list_dir(dir: &Path) -> GenResult<(Vec<PathBuf>, Vec<PathBuf>)> {
    let read_err = |source| GenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut subdirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        // `file_type` does not follow links: a symlinked directory is never walked, so link cycles cannot recurse.
        let file_type = entry.file_type().map_err(read_err)?;
        let entry_path = entry.path();
        if file_type.is_dir() {
            subdirs.push(entry_path);
        } else if file_type.is_file() || (file_type.is_symlink() && entry_path.is_file()) {
            files.push(entry_path);
        } else if file_type.is_symlink() {
            tracing::debug!(path = %entry_path.display(), "not following directory symlink");
        }
    }
    Ok((subdirs, files))
}

fn suite_name(dir: &Path) -> String {
    // `root` may be given as `.` or with a trailing separator; canonicalize only to recover a name.
    match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => dir
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_default(),
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn load_fixture(suite: &str, path: &Path) -> GenResult<FixtureFile> {
    let source = fs::read_to_string(path)
        .map_err(|source| GenError::ReadFixture {
            path: path.to_path_buf(),
            source,
        })?
        .replace("\r\n", "\n");
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FixtureFile {
        suite: suite.to_string(),
        name,
        path: path.to_path_buf(),
        source,
    })
}
