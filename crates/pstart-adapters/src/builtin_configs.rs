//! Built-in configuration documents and document-directory discovery.
//!
//! # Resolution order
//!
//! [`discover`] builds a [`LayeredConfigStore`] from every directory below
//! that exists, in this priority order (first layer holding a document wins):
//!
//! 1. **explicit directory** from `configs.dir` / `--config-dir`. Must exist.
//! 2. **`$PSTART_CONFIG_DIR`**, environment variable override.
//! 3. **`./config`**, relative to the current working directory.
//! 4. **`<executable-dir>/config`**, sibling to the `pstart` binary.
//! 5. **built-in documents** embedded in the binary, unless disabled.
//!
//! The built-in set mirrors `builtin/` in this crate:
//!
//! | type      | patterns                |
//! |-----------|-------------------------|
//! | terraform | `basic`, `multi-module` |
//! | ansible   | `basic`, `role`         |

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use pstart_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{Pattern, ProjectConfig, ProjectType},
    error::PstartResult,
};

use crate::config_store::{
    InMemoryConfigStore, LayeredConfigStore, YamlConfigStore, yaml::parse_document,
};

/// Environment variable naming an extra document directory.
pub const CONFIG_DIR_ENV: &str = "PSTART_CONFIG_DIR";

const BUILTIN: &[(ProjectType, &str, &str)] = &[
    (
        ProjectType::Terraform,
        "basic",
        include_str!("../builtin/terraform/basic.yml"),
    ),
    (
        ProjectType::Terraform,
        "multi-module",
        include_str!("../builtin/terraform/multi-module.yml"),
    ),
    (
        ProjectType::Ansible,
        "basic",
        include_str!("../builtin/ansible/basic.yml"),
    ),
    (
        ProjectType::Ansible,
        "role",
        include_str!("../builtin/ansible/role.yml"),
    ),
];

/// Pseudo-path used to label built-in documents in errors.
pub fn label(project_type: ProjectType, pattern: &Pattern) -> PathBuf {
    PathBuf::from("<builtin>")
        .join(project_type.as_str())
        .join(format!("{pattern}.yml"))
}

/// Decode every embedded document.
pub fn all_configs() -> PstartResult<Vec<(ProjectType, Pattern, ProjectConfig)>> {
    BUILTIN
        .iter()
        .map(|&(project_type, pattern, text)| {
            let pattern = Pattern::parse(project_type, pattern)?;
            let config = parse_document(&label(project_type, &pattern), text)?;
            Ok((project_type, pattern, config))
        })
        .collect()
}

/// Build the layered store described in the module docs.
#[instrument]
pub fn discover(explicit_dir: Option<&Path>, include_builtin: bool) -> PstartResult<LayeredConfigStore> {
    let mut layers: Vec<Box<dyn ConfigStore>> = Vec::new();

    if let Some(dir) = explicit_dir {
        if !dir.is_dir() {
            return Err(ApplicationError::ConfigLoad {
                path: dir.to_path_buf(),
                reason: "configuration directory does not exist".into(),
            }
            .into());
        }
        debug!(path = %dir.display(), "using explicit configuration directory");
        layers.push(Box::new(YamlConfigStore::new(dir)));
    }

    for candidate in candidate_paths() {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "configuration directory found");
            layers.push(Box::new(YamlConfigStore::new(candidate)));
        } else {
            debug!(path = %candidate.display(), "path does not exist, skipping");
        }
    }

    if include_builtin {
        layers.push(Box::new(InMemoryConfigStore::with_builtin()?));
    }

    info!(layers = layers.len(), "configuration stores resolved");
    Ok(LayeredConfigStore::new(layers))
}

/// Ordered list of implicit directories to search.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV) {
        if !env_dir.is_empty() {
            paths.push(PathBuf::from(env_dir));
        }
    }

    paths.push(PathBuf::from("config"));

    if let Some(exe_sibling) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("config")))
    {
        paths.push(exe_sibling);
    }

    paths.dedup();
    paths
}
