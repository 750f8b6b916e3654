//! Declarative project tree, as decoded from a configuration document.
//!
//! ```yaml
//! children:
//!   - name: main.tf
//!   - name: modules
//!     children:
//!       - name: network
//! ```
//!
//! The document is decoded once into [`ProjectConfig`] and validated once;
//! the materializer never re-inspects its shape.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{entities::common::check_segment, error::DomainError};

/// What a [`TreeNode`] becomes on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One declared filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,

    /// Explicit override for names the extension rule gets wrong
    /// (`Makefile`, `Jenkinsfile`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,

    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            children: Vec::new(),
        }
    }

    /// Node forced to be a directory, whatever its name looks like.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            kind: Some(NodeKind::Directory),
            ..Self::new(name)
        }
    }

    /// Node forced to be a file, whatever its name looks like.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: Some(NodeKind::File),
            ..Self::new(name)
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Resolve the node kind from `kind`, `name` and `children` only.
    ///
    /// Without an explicit `kind`, a childless node whose name has a
    /// dot-delimited suffix (`main.tf`, `.gitignore`) is a file; everything
    /// else is a directory.
    pub fn kind(&self) -> NodeKind {
        match self.kind {
            Some(kind) => kind,
            None if self.children.is_empty() && has_extension(&self.name) => NodeKind::File,
            None => NodeKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// Root value of a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub children: Vec<TreeNode>,
}

impl ProjectConfig {
    pub fn new(children: Vec<TreeNode>) -> Self {
        Self {
            description: None,
            children,
        }
    }

    /// Check every invariant of the document:
    /// single-segment names, distinct sibling names, no children under files.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_level(".", &self.children)
    }

    pub fn node_count(&self) -> usize {
        self.children.iter().map(TreeNode::node_count).sum()
    }
}

fn validate_level(parent: &str, nodes: &[TreeNode]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(nodes.len());

    for node in nodes {
        check_segment(&node.name)?;

        if !seen.insert(node.name.as_str()) {
            return Err(DomainError::DuplicateName {
                parent: parent.into(),
                name: node.name.clone(),
            });
        }

        if node.kind == Some(NodeKind::File) && !node.children.is_empty() {
            return Err(DomainError::InvalidNode {
                name: node.name.clone(),
                reason: "declared as a file but has children".into(),
            });
        }

        if !node.children.is_empty() {
            let path = if parent == "." {
                node.name.clone()
            } else {
                format!("{parent}/{}", node.name)
            };
            validate_level(&path, &node.children)?;
        }
    }

    Ok(())
}

/// `true` if `name` has a dot followed by at least one character.
fn has_extension(name: &str) -> bool {
    name.rfind('.').is_some_and(|idx| idx + 1 < name.len())
}

/// `children:` with no value decodes as null in YAML; treat it as empty.
fn nullable_vec<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}
