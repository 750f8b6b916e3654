//! Configuration document stores.

mod layered;
mod memory;
pub mod yaml;

pub use layered::LayeredConfigStore;
pub use memory::InMemoryConfigStore;
pub use yaml::YamlConfigStore;
