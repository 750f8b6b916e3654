//! Tree Materializer - turns a declarative tree into directories and files.
//!
//! Two phases:
//! 1. [`TreeMaterializer::plan`] flattens the tree into a [`ProjectStructure`]
//!    (pure; every name is guarded here).
//! 2. [`TreeMaterializer::apply`] writes the entries in order through the
//!    [`Filesystem`] port.
//!
//! The first filesystem error aborts the walk. Nothing already created is
//! removed; rollback is the caller's decision.

use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::{
    application::ports::Filesystem,
    domain::{DomainValidator, FsEntry, ProjectStructure, RelativePath, TreeNode},
    error::PstartResult,
};

pub struct TreeMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TreeMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Flatten `nodes` beneath `base` without touching the filesystem.
    ///
    /// Fails with `InvalidPath` if any name would resolve outside its parent.
    pub fn plan(base: &Path, nodes: &[TreeNode]) -> PstartResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(base);
        structure.add_tree(&RelativePath::root(), nodes)?;
        DomainValidator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Plan and write `nodes` beneath `base`, which must already exist.
    #[instrument(skip_all, fields(base = %base.display(), nodes = nodes.len()))]
    pub fn materialize(&self, base: &Path, nodes: &[TreeNode]) -> PstartResult<ProjectStructure> {
        let structure = Self::plan(base, nodes)?;
        self.apply(&structure)?;
        Ok(structure)
    }

    /// Write every entry of `structure`, in order.
    ///
    /// Directories are created idempotently. Files are created empty and
    /// never overwrite an existing entry.
    pub fn apply(&self, structure: &ProjectStructure) -> PstartResult<()> {
        for entry in structure.entries() {
            let path = structure.resolve(entry);
            match entry {
                FsEntry::Directory(_) => {
                    trace!(path = %path.display(), "creating directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(_) => {
                    trace!(path = %path.display(), "creating file");
                    self.filesystem.create_file(&path)?;
                }
            }
        }

        debug!(
            files = structure.files().count(),
            directories = structure.directories().count(),
            "tree materialized"
        );
        Ok(())
    }
}
