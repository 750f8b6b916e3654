//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pstart-adapters` crate provides implementations.

use crate::domain::{Pattern, ProjectConfig, ProjectType};
use crate::error::PstartResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pstart_adapters::filesystem::LocalFilesystem` (production)
/// - `pstart_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Files are only ever created empty, and never overwritten
/// - Every error carries the offending path
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory; fails if it already exists.
    fn create_dir(&self, path: &Path) -> PstartResult<()>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> PstartResult<()>;

    /// Create an empty file.
    ///
    /// Fails with `FileCreate` if something already exists at `path`, and
    /// with `MissingParent` if the parent directory does not exist.
    fn create_file(&self, path: &Path) -> PstartResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PstartResult<()>;
}

/// Port for configuration document lookup.
///
/// A (type, pattern) pair addresses at most one document.
///
/// Implemented by:
/// - `pstart_adapters::config_store::YamlConfigStore` (`<dir>/<type>/<pattern>.yml`)
/// - `pstart_adapters::config_store::InMemoryConfigStore` (built-in configs)
/// - `pstart_adapters::config_store::LayeredConfigStore` (first layer wins)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Whether a readable document exists. Never creates anything.
    fn exists(&self, project_type: ProjectType, pattern: &Pattern) -> bool;

    /// Load and decode the document.
    fn load(&self, project_type: ProjectType, pattern: &Pattern) -> PstartResult<ProjectConfig>;

    /// Every pattern available for a project type, sorted.
    fn patterns(&self, project_type: ProjectType) -> PstartResult<Vec<Pattern>>;
}
