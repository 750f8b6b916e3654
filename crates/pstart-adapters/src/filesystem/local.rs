//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind};
use std::path::Path;

use pstart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PstartError, PstartResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> PstartResult<()> {
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ApplicationError::ProjectExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => dir_error(path, e),
        })
    }

    fn create_dir_all(&self, path: &Path) -> PstartResult<()> {
        std::fs::create_dir_all(path).map_err(|e| dir_error(path, e))
    }

    fn create_file(&self, path: &Path) -> PstartResult<()> {
        // create_new refuses to truncate an existing entry.
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ApplicationError::MissingParent {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => ApplicationError::FileCreate {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
                .into(),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_dir_all(&self, path: &Path) -> PstartResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| {
            ApplicationError::RemoveFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn dir_error(path: &Path, e: io::Error) -> PstartError {
    ApplicationError::DirectoryCreate {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
