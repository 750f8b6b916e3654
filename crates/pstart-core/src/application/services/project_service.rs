//! Project Service - main application orchestrator.
//!
//! This service coordinates the entire creation workflow:
//! 1. Validate project type and pattern
//! 2. Load the configuration document
//! 3. Create the project root
//! 4. Materialize the tree
//! 5. Run the augmenters (CI/CD stub, tests directory)
//!
//! Steps 1–4 are fail-fast. Augmenter failures never undo the base tree;
//! they are returned as warnings inside the [`CreateReport`].

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigStore, Filesystem},
        services::{augmenters, materializer::TreeMaterializer},
    },
    domain::{DomainError, DomainValidator, Pattern, ProjectConfig, ProjectStructure, ProjectType},
    error::{PstartError, PstartResult},
};

/// One project creation request, as typed by the user.
///
/// Values are kept raw; validating them is the service's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProject {
    pub name: PathBuf,
    pub project_type: String,
    pub pattern: String,
    pub cicd: Option<String>,
    pub tests: bool,
}

impl CreateProject {
    pub fn new(name: impl Into<PathBuf>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: project_type.into(),
            pattern: String::new(),
            cicd: None,
            tests: false,
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn cicd(mut self, choice: impl Into<String>) -> Self {
        self.cicd = Some(choice.into());
        self
    }

    pub fn tests(mut self, tests: bool) -> Self {
        self.tests = tests;
        self
    }

    fn cicd_choice(&self) -> Option<&str> {
        self.cicd.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Which augmenter produced a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentStep {
    Cicd,
    Tests,
}

impl std::fmt::Display for AugmentStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cicd => f.write_str("CI/CD"),
            Self::Tests => f.write_str("tests"),
        }
    }
}

/// A non-fatal augmenter failure.
#[derive(Debug, Clone)]
pub struct AugmentWarning {
    pub step: AugmentStep,
    pub error: PstartError,
}

/// Outcome of a successful (or planned) creation.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub root: PathBuf,
    pub project_type: ProjectType,
    pub pattern: Pattern,
    /// Base tree entries, plus augmenter entries for dry runs.
    pub structure: ProjectStructure,
    pub warnings: Vec<AugmentWarning>,
}

impl CreateReport {
    /// `true` when every requested step succeeded.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Behaviour switches for [`ProjectService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Remove the project root when the base tree fails mid-walk.
    pub rollback_on_failure: bool,
}

/// Main project creation service.
pub struct ProjectService {
    store: Box<dyn ConfigStore>,
    filesystem: Box<dyn Filesystem>,
    options: ServiceOptions,
}

impl ProjectService {
    /// Create a new project service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pstart_core::application::{ProjectService, CreateProject};
    ///
    /// let service = ProjectService::new(
    ///     store,      // impl ConfigStore
    ///     filesystem, // impl Filesystem
    /// );
    /// service.create_project(&CreateProject::new("demo", "terraform"))?;
    /// ```
    pub fn new(store: Box<dyn ConfigStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            store,
            filesystem,
            options: ServiceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ServiceOptions) -> Self {
        self.options = options;
        self
    }

    /// `true` if `pattern` is empty, or resolves to an existing configuration
    /// for `project_type`. Never creates anything.
    pub fn validate_pattern(&self, project_type: &str, pattern: &str) -> bool {
        let Ok(project_type) = project_type.parse::<ProjectType>() else {
            return false;
        };
        if pattern.trim().is_empty() {
            return true;
        }
        Pattern::parse(project_type, pattern)
            .map(|p| self.store.exists(project_type, &p))
            .unwrap_or(false)
    }

    /// Create a new project.
    ///
    /// This is the main use case. The returned report carries augmenter
    /// warnings; an `Err` means the base tree was not (fully) created.
    #[instrument(
        skip_all,
        fields(
            project = %request.name.display(),
            project_type = %request.project_type,
            pattern = %request.pattern,
        )
    )]
    pub fn create_project(&self, request: &CreateProject) -> PstartResult<CreateReport> {
        // 1-2. Validate before any mutation
        let (project_type, pattern) = self.validate_request(request)?;

        // 3. Load and plan
        let config = self.load_config(project_type, &pattern)?;
        let root = request.name.as_path();
        let structure = TreeMaterializer::plan(root, &config.children)?;

        // 4. Create root
        self.create_root(root)?;
        info!(root = %root.display(), "Project root created");

        // 5. Materialize
        if let Err(e) = TreeMaterializer::new(self.filesystem.as_ref()).apply(&structure) {
            warn!(error = %e, "Tree materialization failed");
            if self.options.rollback_on_failure {
                self.rollback(root, &e)?;
            }
            return Err(e);
        }
        info!(entries = structure.entry_count(), "Base tree created");

        let mut report = CreateReport {
            root: root.to_path_buf(),
            project_type,
            pattern,
            structure,
            warnings: Vec::new(),
        };

        // 6. CI/CD
        if let Some(choice) = request.cicd_choice() {
            if let Err(error) = augmenters::add_cicd(self.filesystem.as_ref(), root, choice) {
                warn!(%error, "CI/CD augmentation failed");
                report.warnings.push(AugmentWarning {
                    step: AugmentStep::Cicd,
                    error,
                });
            }
        }

        // 7. Tests
        if request.tests {
            if let Err(error) = augmenters::add_tests(self.filesystem.as_ref(), root, project_type)
            {
                warn!(%error, "Tests augmentation failed");
                report.warnings.push(AugmentWarning {
                    step: AugmentStep::Tests,
                    error,
                });
            }
        }

        info!(warnings = report.warnings.len(), "Project created");
        Ok(report)
    }

    /// Describe what [`Self::create_project`] would do, without writing.
    #[instrument(skip_all, fields(project = %request.name.display()))]
    pub fn plan(&self, request: &CreateProject) -> PstartResult<CreateReport> {
        let (project_type, pattern) = self.validate_request(request)?;
        let config = self.load_config(project_type, &pattern)?;
        let root = request.name.as_path();
        let mut structure = TreeMaterializer::plan(root, &config.children)?;

        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        let mut warnings = Vec::new();
        if let Some(choice) = request.cicd_choice() {
            if let Err(e) = augmenters::plan_cicd(&mut structure, choice) {
                warnings.push(AugmentWarning {
                    step: AugmentStep::Cicd,
                    error: e.into(),
                });
            }
        }
        if request.tests {
            augmenters::plan_tests(&mut structure, project_type)?;
        }

        Ok(CreateReport {
            root: root.to_path_buf(),
            project_type,
            pattern,
            structure,
            warnings,
        })
    }

    /// Remove an existing project directory and everything below it.
    ///
    /// Confirmation is the caller's responsibility.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn delete_project(&self, path: &Path) -> PstartResult<()> {
        if !self.filesystem.is_dir(path) {
            return Err(ApplicationError::ProjectNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.filesystem.remove_dir_all(path)?;
        info!("Project deleted");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn validate_request(&self, request: &CreateProject) -> PstartResult<(ProjectType, Pattern)> {
        let project_type: ProjectType = request.project_type.parse()?;
        let pattern = Pattern::parse(project_type, &request.pattern)?;

        if !request.pattern.trim().is_empty() && !self.store.exists(project_type, &pattern) {
            return Err(DomainError::InvalidPattern {
                project_type: project_type.to_string(),
                pattern: pattern.to_string(),
                reason: "no configuration exists for this pattern".into(),
            }
            .into());
        }

        if request.name.as_os_str().is_empty() {
            return Err(DomainError::InvalidPath {
                name: String::new(),
                reason: "project name cannot be empty".into(),
            }
            .into());
        }

        Ok((project_type, pattern))
    }

    fn load_config(&self, project_type: ProjectType, pattern: &Pattern) -> PstartResult<ProjectConfig> {
        let config = self.store.load(project_type, pattern)?;
        DomainValidator::validate_config(&config)?;
        info!(
            nodes = config.node_count(),
            "Configuration loaded for {}/{}", project_type, pattern
        );
        Ok(config)
    }

    fn create_root(&self, root: &Path) -> PstartResult<()> {
        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }
        self.filesystem.create_dir(root)
    }

    /// Best-effort rollback on failure.
    /// Remove a half-built root. A failed removal replaces `cause`.
    fn rollback(&self, root: &Path, cause: &PstartError) -> PstartResult<()> {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
            return Err(ApplicationError::RollbackFailed {
                path: root.to_path_buf(),
                reason: format!("{cause}; cleanup failed: {e}"),
            }
            .into());
        }
        info!("Rollback successful");
        Ok(())
    }
}
