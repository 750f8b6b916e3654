//! In-memory configuration store with built-in documents.

use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use pstart_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{Pattern, ProjectConfig, ProjectType},
    error::PstartResult,
};

use crate::builtin_configs;

type Key = (ProjectType, Pattern);

/// Thread-safe in-memory configuration store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<RwLock<BTreeMap<Key, ProjectConfig>>>,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the documents that ship with pstart.
    pub fn with_builtin() -> PstartResult<Self> {
        let store = Self::new();
        for (project_type, pattern, config) in builtin_configs::all_configs()? {
            store.insert(project_type, pattern, config)?;
        }
        Ok(store)
    }

    /// Add or replace a document. The document is validated first.
    pub fn insert(
        &self,
        project_type: ProjectType,
        pattern: Pattern,
        config: ProjectConfig,
    ) -> PstartResult<()> {
        config.validate()?;
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.insert((project_type, pattern), config);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn exists(&self, project_type: ProjectType, pattern: &Pattern) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(&(project_type, pattern.clone())))
            .unwrap_or(false)
    }

    fn load(&self, project_type: ProjectType, pattern: &Pattern) -> PstartResult<ProjectConfig> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner
            .get(&(project_type, pattern.clone()))
            .cloned()
            .ok_or_else(|| {
                ApplicationError::ConfigLoad {
                    path: builtin_configs::label(project_type, pattern),
                    reason: "no built-in configuration".into(),
                }
                .into()
            })
    }

    fn patterns(&self, project_type: ProjectType) -> PstartResult<Vec<Pattern>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        Ok(inner
            .keys()
            .filter(|(ty, _)| *ty == project_type)
            .map(|(_, pattern)| pattern.clone())
            .collect())
    }
}

fn lock_error() -> pstart_core::error::PstartError {
    ApplicationError::ConfigLoad {
        path: PathBuf::from("<memory>"),
        reason: "configuration store lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pstart_core::domain::TreeNode;

    #[test]
    fn builtin_store_has_basic_for_every_type() {
        let store = InMemoryConfigStore::with_builtin().unwrap();
        for &ty in ProjectType::ALL {
            assert!(store.exists(ty, &Pattern::basic()), "{ty} has no basic");
            assert!(!store.load(ty, &Pattern::basic()).unwrap().children.is_empty());
        }
    }

    #[test]
    fn insert_validates_document() {
        let store = InMemoryConfigStore::new();
        let config = ProjectConfig::new(vec![TreeNode::new("a"), TreeNode::new("a")]);
        assert!(
            store
                .insert(ProjectType::Terraform, Pattern::basic(), config)
                .is_err()
        );
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_pattern_is_config_load() {
        let store = InMemoryConfigStore::new();
        assert!(store.load(ProjectType::Ansible, &Pattern::basic()).is_err());
    }
}
