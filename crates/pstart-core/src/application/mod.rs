//! Application layer for pstart.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AugmentStep, AugmentWarning, CatalogEntry, CatalogService, CreateProject, CreateReport,
    ProjectService, ServiceOptions, TreeMaterializer,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigStore, Filesystem};

pub use error::ApplicationError;
