//! Writing generated suite files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::suite_codegen::RenderedSuite;
use crate::errors::{GenError, GenResult};

/// A rendered suite together with where it will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub rendered: RenderedSuite,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, rendered: RenderedSuite) -> Self {
        Self {
            path: path.into(),
            rendered,
        }
    }

    /// Write the file, replacing any previous contents.
    pub fn write(&self) -> GenResult<()> {
        write_generated(&self.path, &self.rendered.contents)
    }
}

/// Overwrite `path` with `contents`. Existing generated files are never merged or preserved.
pub fn write_generated(path: &Path, contents: &str) -> GenResult<()> {
    fs::write(path, contents).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote generated file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rendered(contents: &str) -> RenderedSuite {
        RenderedSuite {
            suite: "s".to_string(),
            contents: contents.to_string(),
            positive: 0,
            negative: 0,
        }
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s_test.rs");
        fs::write(&path, "// hand edits that must not survive\nfn stale() {}\n").unwrap();

        GeneratedFile::new(&path, rendered("// fresh\n")).write().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "// fresh\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join("s_test.rs");
        let err = write_generated(&path, "x").unwrap_err();
        assert!(matches!(err, GenError::Write { path: p, .. } if p == path));
    }
}
