// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is raised before the filesystem is touched, and carries the
/// rejected value so the CLI can echo it back.
///
/// All errors are:
/// - Cloneable (reports keep them as warnings)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project type '{value}': {reason}")]
    InvalidProjectType { value: String, reason: String },

    #[error("Invalid pattern '{pattern}' for project type '{project_type}': {reason}")]
    InvalidPattern {
        project_type: String,
        pattern: String,
        reason: String,
    },

    #[error("Unsupported CI/CD provider '{value}'")]
    UnsupportedCicd { value: String },

    // ========================================================================
    // Configuration Document Errors
    // ========================================================================
    #[error("Duplicate name '{name}' under '{parent}'")]
    DuplicateName { parent: String, name: String },

    #[error("Invalid path segment '{name}': {reason}")]
    InvalidPath { name: String, reason: String },

    #[error("Invalid node '{name}': {reason}")]
    InvalidNode { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectType { value, .. } => vec![
                format!("'{}' is not a supported project type", value),
                format!(
                    "Supported types: {}",
                    crate::domain::ProjectType::ALL
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                "Example: pstart create --type terraform".into(),
            ],
            Self::InvalidPattern { project_type, .. } => vec![
                format!("No configuration found for this {} pattern", project_type),
                format!("Try: pstart list --type {}", project_type),
                "Omit --pattern to use the 'basic' layout".into(),
            ],
            Self::UnsupportedCicd { .. } => vec![
                format!(
                    "Supported providers: {}",
                    crate::domain::CicdProvider::ALL
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                "The project tree was still created; re-run with a valid --cicd".into(),
            ],
            Self::DuplicateName { parent, name } => vec![
                format!("'{}' is declared twice inside '{}'", name, parent),
                "Sibling entries in a configuration must have distinct names".into(),
            ],
            Self::InvalidPath { .. } => vec![
                "Node names must be a single path segment".into(),
                "Do not use '/', '\\', '.' or '..' in names".into(),
            ],
            Self::InvalidNode { .. } => vec![
                "Only directory nodes may declare children".into(),
                "Remove `kind: file` or drop the children list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectType { .. } | Self::UnsupportedCicd { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidPattern { .. } => ErrorCategory::NotFound,
            Self::DuplicateName { .. } | Self::InvalidPath { .. } | Self::InvalidNode { .. } => {
                ErrorCategory::InvalidConfig
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    InvalidConfig,
}
