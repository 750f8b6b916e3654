use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay inside the directory it is joined to.
///
/// Invariant: never absolute, never contains `..`, `.` or a prefix component.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// The empty path (the project root itself).
    pub fn root() -> Self {
        Self(PathBuf::new())
    }

    /// Fallible constructor for multi-segment paths such as
    /// `.github/workflows/main.yml`.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        for component in path.components() {
            if !matches!(component, Component::Normal(_)) {
                return Err(DomainError::InvalidPath {
                    name: path.display().to_string(),
                    reason: "path must be relative and must not contain '.' or '..'".into(),
                });
            }
        }
        Ok(Self(path))
    }

    /// Join exactly one segment, maintaining the invariant.
    pub fn join(&self, segment: &str) -> Result<Self, DomainError> {
        check_segment(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    pub fn parent(&self) -> Option<Self> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Check that `name` is a single, normal path segment.
pub fn check_segment(name: &str) -> Result<(), DomainError> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty")
    } else if name == "." || name == ".." {
        Some("name would resolve outside its parent directory")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if name.contains('\0') {
        Some("name cannot contain NUL bytes")
    } else if Path::new(name).is_absolute() {
        Some("name cannot be an absolute path")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidPath {
            name: name.into(),
            reason: reason.into(),
        }),
        None => Ok(()),
    }
}
