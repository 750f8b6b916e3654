//! Infrastructure adapters for pstart.
//!
//! This crate implements the ports defined in `pstart-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_configs;
pub mod config_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use config_store::{InMemoryConfigStore, LayeredConfigStore, YamlConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
