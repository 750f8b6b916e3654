//! Catalog Service - what can be created.
//!
//! Read-only queries over the configuration store, used by `pstart list`.
//! Separated from ProjectService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::ConfigStore,
    domain::{CicdProvider, Pattern, ProjectType},
    error::PstartResult,
};

/// Patterns available for one project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub project_type: ProjectType,
    pub patterns: Vec<Pattern>,
}

/// Service for catalog queries.
pub struct CatalogService {
    store: Box<dyn ConfigStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Patterns for a single type.
    pub fn patterns(&self, project_type: ProjectType) -> PstartResult<Vec<Pattern>> {
        self.store.patterns(project_type)
    }

    /// One entry per supported project type, in declaration order.
    pub fn entries(&self) -> PstartResult<Vec<CatalogEntry>> {
        ProjectType::ALL
            .iter()
            .map(|&project_type| {
                Ok(CatalogEntry {
                    project_type,
                    patterns: self.patterns(project_type)?,
                })
            })
            .collect()
    }

    /// Supported CI/CD providers.
    pub fn providers(&self) -> &'static [CicdProvider] {
        CicdProvider::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConfigStore;

    #[test]
    fn entries_cover_every_type() {
        let mut store = MockConfigStore::new();
        store.expect_patterns().returning(|ty| {
            Ok(match ty {
                ProjectType::Terraform => vec![
                    Pattern::basic(),
                    Pattern::parse(ty, "multi-module").unwrap(),
                ],
                ProjectType::Ansible => vec![Pattern::basic()],
            })
        });

        let entries = CatalogService::new(Box::new(store)).entries().unwrap();
        assert_eq!(entries.len(), ProjectType::ALL.len());
        assert_eq!(entries[0].project_type, ProjectType::Terraform);
        assert_eq!(entries[0].patterns.len(), 2);
    }

    #[test]
    fn providers_are_the_closed_set() {
        let service = CatalogService::new(Box::new(MockConfigStore::new()));
        assert_eq!(service.providers().len(), 5);
    }
}
