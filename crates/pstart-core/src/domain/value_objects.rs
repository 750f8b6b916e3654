//! Domain value objects: ProjectType, Pattern, CicdProvider.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. This file's
//! only job is to define the closed sets, their string representations, and
//! their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `FromStr` arm and the `ALL` entry
//! 3. Ship a `basic` config for a new project type (adapters)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The family of project to bootstrap.
///
/// Selects the configuration namespace (`<config-dir>/<type>/...`) and the
/// starter file dropped into `tests/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Terraform,
    Ansible,
}

impl ProjectType {
    pub const ALL: &'static [ProjectType] = &[Self::Terraform, Self::Ansible];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Terraform => "terraform",
            Self::Ansible => "ansible",
        }
    }

    /// Starter file created under `tests/` by the tests augmenter.
    pub const fn test_starter(&self) -> &'static str {
        match self {
            // terratest convention
            Self::Terraform => "main_test.go",
            // molecule converge playbook
            Self::Ansible => "test.yml",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terraform" | "tf" => Ok(Self::Terraform),
            "ansible" => Ok(Self::Ansible),
            "" => Err(DomainError::InvalidProjectType {
                value: s.into(),
                reason: "project type cannot be empty".into(),
            }),
            _ => Err(DomainError::InvalidProjectType {
                value: s.into(),
                reason: "not one of the supported project types".into(),
            }),
        }
    }
}

// ── Pattern ──────────────────────────────────────────────────────────────────

/// A named layout variant of a [`ProjectType`].
///
/// Invariant: a single path segment made of ASCII alphanumerics, `-` and `_`.
/// Case is kept as typed: the name must match the document file on disk.
/// It is spliced into `<type>/<pattern>.yml`, so nothing that could escape
/// the config directory is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub const BASIC: &'static str = "basic";

    /// The canonical default layout.
    pub fn basic() -> Self {
        Self(Self::BASIC.into())
    }

    /// Parse user input; an empty (or all-whitespace) string means "basic".
    pub fn parse(project_type: ProjectType, raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::basic());
        }

        let valid = raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DomainError::InvalidPattern {
                project_type: project_type.to_string(),
                pattern: raw.into(),
                reason: "pattern names may only contain letters, digits, '-' and '_'".into(),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_basic(&self) -> bool {
        self.0 == Self::BASIC
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::basic()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── CicdProvider ─────────────────────────────────────────────────────────────

/// A CI/CD service whose pipeline stub can be appended to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CicdProvider {
    Github,
    Circle,
    Travis,
    Jenkins,
    Gitlab,
}

impl CicdProvider {
    pub const ALL: &'static [CicdProvider] = &[
        Self::Github,
        Self::Circle,
        Self::Travis,
        Self::Jenkins,
        Self::Gitlab,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Circle => "circle",
            Self::Travis => "travis",
            Self::Jenkins => "jenkins",
            Self::Gitlab => "gitlab",
        }
    }

    /// Pipeline file location, relative to the project root.
    ///
    /// Fixed table; independent of project type and pattern.
    pub const fn target_path(&self) -> &'static str {
        match self {
            Self::Github => ".github/workflows/main.yml",
            Self::Circle => ".circleci/config.yml",
            Self::Travis => ".travis.yml",
            Self::Jenkins => "Jenkinsfile",
            Self::Gitlab => ".gitlab-ci.yml",
        }
    }
}

impl fmt::Display for CicdProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CicdProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "circle" => Ok(Self::Circle),
            "travis" => Ok(Self::Travis),
            "jenkins" => Ok(Self::Jenkins),
            "gitlab" => Ok(Self::Gitlab),
            _ => Err(DomainError::UnsupportedCicd { value: s.into() }),
        }
    }
}
