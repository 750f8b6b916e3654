//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use pstart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PstartResult,
};

/// In-memory filesystem for testing.
///
/// Paths are stored verbatim; the empty path counts as an existing
/// directory, so relative roots like `demo` can be created.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeSet<PathBuf>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }

    fn occupied(&self, path: &Path) -> bool {
        self.files.contains(path) || self.directories.contains(path)
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// List all files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// `true` if `path` was created as a file.
    pub fn is_file(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains(path))
            .unwrap_or(false)
    }

    /// Clear all contents.
    pub fn clear(&self) -> PstartResult<()> {
        let mut inner = self.write()?;
        inner.files.clear();
        inner.directories.clear();
        Ok(())
    }

    fn read(&self) -> PstartResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_error())
    }

    fn write(&self) -> PstartResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_error())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> PstartResult<()> {
        let mut inner = self.write()?;

        if inner.occupied(path) {
            return Err(ApplicationError::ProjectExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::DirectoryCreate {
                path: path.to_path_buf(),
                reason: "parent directory does not exist".into(),
            }
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> PstartResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains(&current) {
                return Err(ApplicationError::DirectoryCreate {
                    path: path.to_path_buf(),
                    reason: format!("'{}' is a file", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn create_file(&self, path: &Path) -> PstartResult<()> {
        let mut inner = self.write()?;

        if !inner.parent_exists(path) {
            return Err(ApplicationError::MissingParent {
                path: path.to_path_buf(),
            }
            .into());
        }
        if inner.occupied(path) {
            return Err(ApplicationError::FileCreate {
                path: path.to_path_buf(),
                reason: "an entry already exists at this path".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.occupied(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> PstartResult<()> {
        let mut inner = self.write()?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::RemoveFailed {
                path: path.to_path_buf(),
                reason: "no such directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p| !p.starts_with(path));
        Ok(())
    }
}

fn lock_error() -> pstart_core::error::PstartError {
    ApplicationError::AdapterFailure {
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}
