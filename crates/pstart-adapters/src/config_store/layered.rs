//! Store stacking several stores; the first one holding a document wins.

use pstart_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{Pattern, ProjectConfig, ProjectType},
    error::PstartResult,
};

pub struct LayeredConfigStore {
    layers: Vec<Box<dyn ConfigStore>>,
}

impl LayeredConfigStore {
    pub fn new(layers: Vec<Box<dyn ConfigStore>>) -> Self {
        Self { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConfigStore for LayeredConfigStore {
    fn exists(&self, project_type: ProjectType, pattern: &Pattern) -> bool {
        self.layers
            .iter()
            .any(|layer| layer.exists(project_type, pattern))
    }

    fn load(&self, project_type: ProjectType, pattern: &Pattern) -> PstartResult<ProjectConfig> {
        match self
            .layers
            .iter()
            .find(|layer| layer.exists(project_type, pattern))
        {
            Some(layer) => layer.load(project_type, pattern),
            None => Err(ApplicationError::ConfigLoad {
                path: format!("{project_type}/{pattern}.yml").into(),
                reason: "no configuration directory provides this document".into(),
            }
            .into()),
        }
    }

    fn patterns(&self, project_type: ProjectType) -> PstartResult<Vec<Pattern>> {
        let mut all = Vec::new();
        for layer in &self.layers {
            all.extend(layer.patterns(project_type)?);
        }
        all.sort();
        all.dedup();
        Ok(all)
    }
}
