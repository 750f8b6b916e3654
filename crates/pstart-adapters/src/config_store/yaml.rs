//! Filesystem-backed configuration store.
//!
//! Documents are addressed as `<root>/<type>/<pattern>.yml`:
//!
//! ```text
//! config/
//! ├── terraform/
//! │   ├── basic.yml
//! │   └── multi-module.yml
//! └── ansible/
//!     └── basic.yml
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use pstart_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{Pattern, ProjectConfig, ProjectType},
    error::PstartResult,
};

/// File extension of configuration documents.
pub const DOCUMENT_EXTENSION: &str = "yml";

/// Decode and validate one YAML document. `source` only labels errors.
pub fn parse_document(source: &Path, text: &str) -> PstartResult<ProjectConfig> {
    let config: ProjectConfig =
        serde_yaml::from_str(text).map_err(|e| ApplicationError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

/// Reads configuration documents from a directory tree.
#[derive(Debug, Clone)]
pub struct YamlConfigStore {
    root: PathBuf,
}

impl YamlConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a (type, pattern) pair resolves to. The file may not exist.
    pub fn document_path(&self, project_type: ProjectType, pattern: &Pattern) -> PathBuf {
        self.root
            .join(project_type.as_str())
            .join(format!("{}.{}", pattern.as_str(), DOCUMENT_EXTENSION))
    }
}

impl ConfigStore for YamlConfigStore {
    fn exists(&self, project_type: ProjectType, pattern: &Pattern) -> bool {
        self.document_path(project_type, pattern).is_file()
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, project_type: ProjectType, pattern: &Pattern) -> PstartResult<ProjectConfig> {
        let path = self.document_path(project_type, pattern);
        let text = std::fs::read_to_string(&path).map_err(|e| ApplicationError::ConfigLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let config = parse_document(&path, &text)?;
        debug!(path = %path.display(), nodes = config.node_count(), "document loaded");
        Ok(config)
    }

    fn patterns(&self, project_type: ProjectType) -> PstartResult<Vec<Pattern>> {
        let dir = self.root.join(project_type.as_str());
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut patterns = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::ConfigLoad {
                path: dir.clone(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Pattern::parse(project_type, stem) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping document"),
            }
        }

        patterns.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pstart_core::{
        domain::{DomainError, NodeKind},
        error::PstartError,
    };
    use std::fs;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, YamlConfigStore) {
        let dir = TempDir::new().unwrap();
        for (rel, text) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, text).unwrap();
        }
        let store = YamlConfigStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn loads_basic_document() {
        let (_dir, store) = store_with(&[(
            "terraform/basic.yml",
            "description: demo\nchildren:\n  - name: main.tf\n  - name: src\n",
        )]);

        let config = store.load(ProjectType::Terraform, &Pattern::basic()).unwrap();
        assert_eq!(config.description.as_deref(), Some("demo"));
        assert_eq!(config.children.len(), 2);
        assert_eq!(config.children[1].kind(), NodeKind::Directory);
    }

    #[test]
    fn nodes_without_children_key_are_accepted() {
        let (_dir, store) = store_with(&[(
            "ansible/basic.yml",
            "children:\n  - name: roles\n    children:\n  - name: site.yml\n",
        )]);
        let config = store.load(ProjectType::Ansible, &Pattern::basic()).unwrap();
        assert!(config.children[0].children.is_empty());
    }

    #[test]
    fn missing_document_is_config_load() {
        let (_dir, store) = store_with(&[]);
        assert!(!store.exists(ProjectType::Terraform, &Pattern::basic()));
        let err = store
            .load(ProjectType::Terraform, &Pattern::basic())
            .unwrap_err();
        assert!(matches!(
            err,
            PstartError::Application(ApplicationError::ConfigLoad { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_config_load() {
        let (_dir, store) = store_with(&[("terraform/basic.yml", "children: [unclosed")]);
        let err = store
            .load(ProjectType::Terraform, &Pattern::basic())
            .unwrap_err();
        assert!(matches!(
            err,
            PstartError::Application(ApplicationError::ConfigLoad { .. })
        ));
    }

    #[test]
    fn duplicate_siblings_are_rejected_on_load() {
        let (_dir, store) = store_with(&[(
            "terraform/basic.yml",
            "children:\n  - name: main.tf\n  - name: main.tf\n",
        )]);
        let err = store
            .load(ProjectType::Terraform, &Pattern::basic())
            .unwrap_err();
        assert!(matches!(
            err,
            PstartError::Domain(DomainError::DuplicateName { .. })
        ));
    }

    #[test]
    fn patterns_lists_yml_documents_sorted() {
        let (_dir, store) = store_with(&[
            ("terraform/multi-module.yml", "children: []"),
            ("terraform/basic.yml", "children: []"),
            ("terraform/notes.txt", "ignored"),
            ("terraform/bad name.yml", "children: []"),
        ]);
        let patterns: Vec<String> = store
            .patterns(ProjectType::Terraform)
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(patterns, vec!["basic", "multi-module"]);
        assert!(store.patterns(ProjectType::Ansible).unwrap().is_empty());
    }

    #[test]
    fn every_listed_pattern_resolves() {
        let (_dir, store) = store_with(&[
            ("terraform/MultiEnv.yml", "children:\n  - name: main.tf\n"),
            ("terraform/basic.yml", "children: []"),
        ]);
        let listed = store.patterns(ProjectType::Terraform).unwrap();
        assert_eq!(listed.len(), 2);
        for pattern in &listed {
            assert!(
                store.exists(ProjectType::Terraform, pattern),
                "listed pattern {pattern} does not resolve"
            );
            store.load(ProjectType::Terraform, pattern).unwrap();
        }

        let typed = Pattern::parse(ProjectType::Terraform, "MultiEnv").unwrap();
        assert!(store.exists(ProjectType::Terraform, &typed));
    }
}
