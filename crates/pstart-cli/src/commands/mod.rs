//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;

use pstart_adapters::{LayeredConfigStore, builtin_configs};

use crate::{config::AppConfig, error::CliResult};

/// Configuration-document store for this invocation, per `[configs]`.
pub(crate) fn config_store(config: &AppConfig) -> CliResult<LayeredConfigStore> {
    let store = builtin_configs::discover(config.configs.dir.as_deref(), config.configs.builtin)?;
    Ok(store)
}
