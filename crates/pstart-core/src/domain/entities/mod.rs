pub mod common;
pub mod project_structure;
pub mod tree;

pub use crate::domain::DomainError;
pub use project_structure::{FsEntry, ProjectStructure};
pub use tree::{NodeKind, ProjectConfig, TreeNode};
