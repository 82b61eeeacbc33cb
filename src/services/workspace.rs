//! Per-run scratch space and the persistent output directory.

use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use crate::errors::AppResult;

/// Filesystem scope of one pipeline run: a uniquely named temporary
/// directory for intermediates, plus the long-lived output directory.
///
/// The temporary directory is removed exactly once per run, on every
/// exit path: explicitly via [`Workspace::close`] on success, or by the
/// drop guard on failure and unwind.
pub struct Workspace {
    temp: TempDir,
    output_dir: PathBuf,
}

impl Workspace {
    /// Allocate a fresh scratch directory and make sure the output
    /// directory exists (no error when it already does).
    pub fn create(output_dir: &Path) -> AppResult<Self> {
        let temp = TempDir::new()?;
        std::fs::create_dir_all(output_dir)?;
        debug!("Created workspace {}", temp.path().display());

        Ok(Self {
            temp,
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Remove the scratch directory, surfacing removal errors the drop
    /// guard would swallow.
    pub fn close(self) -> AppResult<()> {
        self.temp.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_removes_the_scratch_directory() {
        let out = tempfile::tempdir().unwrap();
        let workspace = Workspace::create(out.path()).unwrap();
        let scratch = workspace.path().to_path_buf();
        assert!(scratch.is_dir());

        workspace.close().unwrap();
        assert!(!scratch.exists());
    }

    #[test]
    fn drop_removes_the_scratch_directory() {
        let out = tempfile::tempdir().unwrap();
        let scratch;
        {
            let workspace = Workspace::create(out.path()).unwrap();
            scratch = workspace.path().to_path_buf();
            std::fs::write(scratch.join("intermediate.wav"), b"data").unwrap();
        }
        assert!(!scratch.exists());
    }

    #[test]
    fn output_directory_is_created_when_missing() {
        let base = tempfile::tempdir().unwrap();
        let out = base.path().join("nested").join("output");

        let workspace = Workspace::create(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(workspace.output_dir(), out.as_path());

        // creating again over the existing directory is fine
        Workspace::create(&out).unwrap();
    }
}
