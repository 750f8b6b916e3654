//! pstart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pstart
//! project creation tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pstart-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProjectService, CatalogService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: ConfigStore, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pstart-adapters (Infrastructure)    │
//! │ (YamlConfigStore, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectType, TreeNode, ProjectStructure)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pstart_core::application::{CreateProject, ProjectService};
//!
//! // Adapters are injected; see pstart-adapters.
//! let service = ProjectService::new(store, filesystem);
//!
//! let report = service.create_project(
//!     &CreateProject::new("demo", "terraform").cicd("github").tests(true),
//! )?;
//! for warning in &report.warnings {
//!     eprintln!("{}: {}", warning.step, warning.error);
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AugmentStep, AugmentWarning, CatalogService, CreateProject, CreateReport, ProjectService,
        ServiceOptions,
        ports::{ConfigStore, Filesystem},
    };
    pub use crate::domain::{
        CicdProvider, FsEntry, NodeKind, Pattern, ProjectConfig, ProjectStructure, ProjectType,
        TreeNode,
    };
    pub use crate::error::{PstartError, PstartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
