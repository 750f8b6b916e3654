// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pstart.
//!
//! This module contains pure business logic with no I/O. Filesystem access
//! and configuration loading are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No heavy crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    project_structure::{FsEntry, ProjectStructure},
    tree::{NodeKind, ProjectConfig, TreeNode},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CicdProvider, Pattern, ProjectType};

pub use entities::common::{RelativePath, check_segment};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn project_type_parses_correctly() {
        assert_eq!(
            ProjectType::from_str("terraform").unwrap(),
            ProjectType::Terraform
        );
        assert_eq!(ProjectType::from_str("TF").unwrap(), ProjectType::Terraform);
        assert_eq!(
            ProjectType::from_str("Ansible").unwrap(),
            ProjectType::Ansible
        );
        assert!(ProjectType::from_str("pulumi").is_err());
    }

    #[test]
    fn every_supported_type_validates() {
        for ty in ProjectType::ALL {
            assert!(DomainValidator::validate_project_type(ty.as_str()));
        }
    }

    #[test]
    fn unknown_types_do_not_validate() {
        for value in ["", "unknown", "terraform/", "../terraform", "chef"] {
            assert!(
                !DomainValidator::validate_project_type(value),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_pattern_defaults_to_basic() {
        for ty in ProjectType::ALL {
            let pattern = Pattern::parse(*ty, "").unwrap();
            assert!(pattern.is_basic());
            assert_eq!(Pattern::parse(*ty, "   ").unwrap(), Pattern::basic());
        }
    }

    #[test]
    fn pattern_rejects_traversal() {
        for raw in ["../basic", "a/b", "a.b", "with space"] {
            assert!(matches!(
                Pattern::parse(ProjectType::Terraform, raw),
                Err(DomainError::InvalidPattern { .. })
            ));
        }
    }

    #[test]
    fn pattern_keeps_its_case() {
        let pattern = Pattern::parse(ProjectType::Ansible, " Multi-Role ").unwrap();
        assert_eq!(pattern.as_str(), "Multi-Role");
        assert_ne!(pattern, Pattern::parse(ProjectType::Ansible, "multi-role").unwrap());
    }

    #[test]
    fn cicd_target_paths_are_fixed() {
        let table = [
            ("github", ".github/workflows/main.yml"),
            ("circle", ".circleci/config.yml"),
            ("travis", ".travis.yml"),
            ("jenkins", "Jenkinsfile"),
            ("gitlab", ".gitlab-ci.yml"),
        ];
        for (choice, path) in table {
            let provider = CicdProvider::from_str(choice).unwrap();
            assert_eq!(provider.target_path(), path);
            // Same answer on every call.
            assert_eq!(provider.target_path(), CicdProvider::from_str(choice).unwrap().target_path());
        }
    }

    #[test]
    fn cicd_validation() {
        assert!(DomainValidator::validate_cicd("github"));
        assert!(DomainValidator::validate_cicd("GitLab"));
        assert!(!DomainValidator::validate_cicd("bitbucket"));
        assert!(!DomainValidator::validate_cicd(""));
    }

    #[test]
    fn unsupported_cicd_keeps_rejected_value() {
        let err = CicdProvider::from_str("drone").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedCicd {
                value: "drone".into()
            }
        );
    }

    // ========================================================================
    // Tree Node Tests
    // ========================================================================

    #[test]
    fn childless_name_without_extension_is_directory() {
        assert_eq!(TreeNode::new("src").kind(), NodeKind::Directory);
    }

    #[test]
    fn childless_name_with_extension_is_file() {
        assert_eq!(TreeNode::new("main.tf").kind(), NodeKind::File);
    }

    #[test]
    fn config_rejects_duplicate_siblings() {
        let config = ProjectConfig::new(vec![TreeNode::new("src"), TreeNode::new("src")]);
        assert!(matches!(
            DomainValidator::validate_config(&config),
            Err(DomainError::DuplicateName { .. })
        ));
    }

    #[test]
    fn config_allows_same_name_in_different_directories() {
        let config = ProjectConfig::new(vec![
            TreeNode::new("a").with_child(TreeNode::new("main.tf")),
            TreeNode::new("b").with_child(TreeNode::new("main.tf")),
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_traversal_names() {
        for name in ["..", ".", "../escape", "a/b", "", "/etc"] {
            let config = ProjectConfig::new(vec![TreeNode::new(name)]);
            assert!(
                matches!(config.validate(), Err(DomainError::InvalidPath { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    // ========================================================================
    // Project Structure Tests
    // ========================================================================

    #[test]
    fn structure_flattens_depth_first_pre_order() {
        let nodes = vec![
            TreeNode::new("pkg").with_child(TreeNode::new("util.go")),
            TreeNode::new("main.tf"),
        ];
        let mut structure = ProjectStructure::new("/tmp/demo");
        structure.add_tree(&RelativePath::root(), &nodes).unwrap();

        let expected = vec![
            FsEntry::Directory(RelativePath::try_new("pkg").unwrap()),
            FsEntry::File(RelativePath::try_new("pkg/util.go").unwrap()),
            FsEntry::File(RelativePath::try_new("main.tf").unwrap()),
        ];
        assert_eq!(structure.entries(), expected.as_slice());
        assert_eq!(structure.files().count(), 2);
        assert_eq!(structure.directories().count(), 1);
    }

    #[test]
    fn structure_adds_parents_before_file() {
        let mut structure = ProjectStructure::new("demo");
        structure.add_file_with_parents(RelativePath::try_new(".github/workflows/main.yml").unwrap());

        let paths: Vec<String> = structure
            .entries()
            .iter()
            .map(|e| e.path().to_string())
            .collect();
        assert_eq!(paths, vec![".github", ".github/workflows", ".github/workflows/main.yml"]);
    }

    #[test]
    fn structure_rejects_duplicate_files() {
        let structure = ProjectStructure::new("demo")
            .with_file(RelativePath::try_new(".travis.yml").unwrap())
            .with_file(RelativePath::try_new(".travis.yml").unwrap());
        assert!(structure.validate().is_err());
    }

    #[test]
    fn structure_allows_repeated_directories() {
        let structure = ProjectStructure::new("demo")
            .with_directory(RelativePath::try_new("tests").unwrap())
            .with_directory(RelativePath::try_new("tests").unwrap());
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn relative_path_rejects_escape() {
        assert!(RelativePath::try_new("../x").is_err());
        assert!(RelativePath::try_new("/abs").is_err());
        assert!(RelativePath::root().join("..").is_err());
    }
}
