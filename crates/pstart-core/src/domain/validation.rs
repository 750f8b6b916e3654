use crate::domain::{
    entities::{ProjectConfig, ProjectStructure},
    error::DomainError,
    value_objects::{CicdProvider, ProjectType},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities. The
/// boolean checks never fail and never touch the filesystem.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_type(value: &str) -> bool {
        value.parse::<ProjectType>().is_ok()
    }

    pub fn validate_cicd(value: &str) -> bool {
        value.parse::<CicdProvider>().is_ok()
    }

    pub fn validate_config(config: &ProjectConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
