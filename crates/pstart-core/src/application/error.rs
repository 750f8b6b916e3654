//! Application layer errors.
//!
//! These errors represent failures in orchestration and resources, not input
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The configuration document could not be read or decoded.
    #[error("Failed to load configuration {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Project to delete does not exist.
    #[error("No project directory at {path}")]
    ProjectNotFound { path: PathBuf },

    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreate { path: PathBuf, reason: String },

    /// A file could not be created (including: it already exists).
    #[error("Failed to create file {path}: {reason}")]
    FileCreate { path: PathBuf, reason: String },

    /// A file was requested under a directory that does not exist.
    #[error("Parent directory of {path} does not exist")]
    MissingParent { path: PathBuf },

    /// A project directory could not be removed.
    #[error("Failed to remove {path}: {reason}")]
    RemoveFailed { path: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// Filesystem state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter error: {reason}")]
    AdapterFailure { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigLoad { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check the YAML syntax and the `children` list".into(),
                "Try: pstart list to see available patterns".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name with --name".into(),
                "Or remove it first: pstart delete --name <name>".into(),
            ],
            Self::ProjectNotFound { path } => vec![
                format!("Nothing to delete at {}", path.display()),
                "Check the project name and your working directory".into(),
            ],
            Self::DirectoryCreate { path, .. } | Self::FileCreate { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Entries created before the failure were left on disk".into(),
            ],
            Self::MissingParent { path } => vec![
                format!("Parent of {} is missing", path.display()),
                "This usually means the tree was modified during creation".into(),
            ],
            Self::RemoveFailed { path, .. } | Self::RollbackFailed { path, .. } => vec![
                format!("Remove it manually: rm -rf {}", path.display()),
            ],
            Self::AdapterFailure { .. } => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigLoad { .. } => ErrorCategory::Configuration,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::DirectoryCreate { .. }
            | Self::FileCreate { .. }
            | Self::MissingParent { .. }
            | Self::RemoveFailed { .. }
            | Self::RollbackFailed { .. } => ErrorCategory::Resource,
            Self::AdapterFailure { .. } => ErrorCategory::Internal,
        }
    }

    /// Path the error is about, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ConfigLoad { path, .. }
            | Self::ProjectExists { path }
            | Self::ProjectNotFound { path }
            | Self::DirectoryCreate { path, .. }
            | Self::FileCreate { path, .. }
            | Self::MissingParent { path }
            | Self::RemoveFailed { path, .. }
            | Self::RollbackFailed { path, .. } => Some(path),
            Self::AdapterFailure { .. } => None,
        }
    }
}
