//! Post-processing steps applied once the base tree exists.
//!
//! Each step comes in two flavours: `plan_*` appends to a
//! [`ProjectStructure`] (dry runs), `add_*` writes through the
//! [`Filesystem`] port.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{CicdProvider, DomainError, ProjectStructure, ProjectType, RelativePath},
    error::PstartResult,
};

/// Directory created by the tests augmenter.
pub const TESTS_DIR: &str = "tests";

/// Resolve a CI/CD choice to its pipeline file.
///
/// `Ok(None)` for an empty choice; `UnsupportedCicd` for an unknown one.
pub fn cicd_target(choice: &str) -> Result<Option<RelativePath>, DomainError> {
    if choice.trim().is_empty() {
        return Ok(None);
    }
    let provider: CicdProvider = choice.parse()?;
    RelativePath::try_new(provider.target_path()).map(Some)
}

/// Create the empty pipeline file for `choice` under `root`.
///
/// The choice is checked before anything is written. An existing pipeline
/// file is kept as is.
#[instrument(skip(filesystem, root), fields(root = %root.display()))]
pub fn add_cicd(filesystem: &dyn Filesystem, root: &Path, choice: &str) -> PstartResult<()> {
    let Some(target) = cicd_target(choice)? else {
        return Ok(());
    };

    let path = root.join(target.as_path());
    if filesystem.exists(&path) {
        debug!(path = %path.display(), "pipeline file already present");
        return Ok(());
    }
    if let Some(parent) = target.parent() {
        filesystem.create_dir_all(&root.join(parent.as_path()))?;
    }
    filesystem.create_file(&path)?;

    debug!(path = %path.display(), "pipeline stub created");
    Ok(())
}

/// Planned counterpart of [`add_cicd`]: a pipeline file the layout already
/// declares is left as the only entry for that path.
pub fn plan_cicd(structure: &mut ProjectStructure, choice: &str) -> Result<(), DomainError> {
    if let Some(target) = cicd_target(choice)? {
        if !structure.files().any(|f| *f == target) {
            structure.add_file_with_parents(target);
        }
    }
    Ok(())
}

/// Create `tests/` and the type-specific starter file. Idempotent.
#[instrument(skip(filesystem, root), fields(root = %root.display()))]
pub fn add_tests(
    filesystem: &dyn Filesystem,
    root: &Path,
    project_type: ProjectType,
) -> PstartResult<()> {
    let dir = root.join(TESTS_DIR);
    filesystem.create_dir_all(&dir)?;

    let starter = dir.join(project_type.test_starter());
    if filesystem.exists(&starter) {
        debug!(path = %starter.display(), "starter already present");
        return Ok(());
    }
    filesystem.create_file(&starter)?;

    debug!(path = %starter.display(), "tests directory created");
    Ok(())
}

pub fn plan_tests(
    structure: &mut ProjectStructure,
    project_type: ProjectType,
) -> Result<(), DomainError> {
    let dir = RelativePath::root().join(TESTS_DIR)?;
    let starter = dir.join(project_type.test_starter())?;
    if !structure.files().any(|f| *f == starter) {
        structure.add_directory(dir);
        structure.add_file(starter);
    }
    Ok(())
}
