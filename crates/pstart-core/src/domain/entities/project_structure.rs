use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        common::RelativePath,
        tree::{NodeKind, TreeNode},
    },
    error::DomainError,
};

/// Flattened, ordered plan of what a project tree becomes on disk.
///
/// Entries are root-relative and ordered depth-first, pre-order, so every
/// parent directory precedes its contents. It contains no business logic
/// beyond the flattening itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath) {
        self.entries.push(FsEntry::File(path));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(FsEntry::Directory(path));
    }

    pub fn with_file(mut self, path: RelativePath) -> Self {
        self.add_file(path);
        self
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    /// Append `nodes` (and their subtrees) beneath `base`.
    ///
    /// Fails on the first name that is not a single path segment, before
    /// anything is appended for that node.
    pub fn add_tree(&mut self, base: &RelativePath, nodes: &[TreeNode]) -> Result<(), DomainError> {
        for node in nodes {
            let path = base.join(&node.name)?;
            match node.kind() {
                NodeKind::File => self.add_file(path),
                NodeKind::Directory => {
                    self.add_directory(path.clone());
                    self.add_tree(&path, &node.children)?;
                }
            }
        }
        Ok(())
    }

    /// Append a file together with directory entries for its missing parents.
    pub fn add_file_with_parents(&mut self, path: RelativePath) {
        let mut parents = Vec::new();
        let mut current = path.parent();
        while let Some(parent) = current {
            current = parent.parent();
            parents.push(parent);
        }
        for parent in parents.into_iter().rev() {
            self.add_directory(parent);
        }
        self.add_file(path);
    }

    /// Reject plans that create the same file twice.
    ///
    /// Repeated directories are fine: directory creation is idempotent.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in self.files() {
            if !seen.insert(file.as_path()) {
                return Err(DomainError::DuplicateName {
                    parent: file
                        .parent()
                        .map_or_else(|| ".".to_string(), |p| p.to_string()),
                    name: file
                        .as_path()
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute (root-joined) location of an entry.
    pub fn resolve(&self, entry: &FsEntry) -> PathBuf {
        self.root.join(entry.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File(RelativePath),
    Directory(RelativePath),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}
