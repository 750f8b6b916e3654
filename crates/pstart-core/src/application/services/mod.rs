//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "list patterns".

pub mod augmenters;
pub mod catalog_service;
pub mod materializer;
pub mod project_service;

pub use catalog_service::{CatalogEntry, CatalogService};
pub use materializer::TreeMaterializer;
pub use project_service::{
    AugmentStep, AugmentWarning, CreateProject, CreateReport, ProjectService, ServiceOptions,
};
