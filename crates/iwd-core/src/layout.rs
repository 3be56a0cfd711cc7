//! # Repository Layout
//!
//! The conventional locations of the release artifacts, relative to the
//! repository root. [`RepoLayout::default`] is the layout every release is
//! checked against; [`RepoLayout::new`] exists so tests and embedders can
//! point the checks elsewhere without touching the checkers.
//!
//! A layout serializes as `{blueprint, metadata, required_paths}`.
//! Deserialization goes through [`RepoLayout::new`], so a layout read from
//! a file is held to the same invariants as one built in code.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// The blueprint YAML document.
pub const BLUEPRINT_PATH: &str = "blueprints/automation/integration_watchdog_auto.yaml";

/// The HACS packaging descriptor.
pub const METADATA_PATH: &str = "hacs.json";

/// The repository README.
pub const README_PATH: &str = "README.md";

/// The CI workflow that runs this validator.
pub const WORKFLOW_PATH: &str = ".github/workflows/validate.yml";

/// Where the release artifacts live, relative to the repository root.
///
/// Invariants, enforced at construction: the required-path set is non-empty
/// and every path is relative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields")]
pub struct RepoLayout {
    blueprint: PathBuf,
    metadata: PathBuf,
    required_paths: Vec<PathBuf>,
}

impl RepoLayout {
    /// Build a layout, checking its invariants.
    pub fn new(
        blueprint: impl Into<PathBuf>,
        metadata: impl Into<PathBuf>,
        required_paths: Vec<PathBuf>,
    ) -> Result<Self, LayoutError> {
        let blueprint = blueprint.into();
        let metadata = metadata.into();

        if required_paths.is_empty() {
            return Err(LayoutError::EmptyRequiredPaths);
        }
        for path in std::iter::once(&blueprint)
            .chain(std::iter::once(&metadata))
            .chain(required_paths.iter())
        {
            if path.is_absolute() {
                return Err(LayoutError::AbsolutePath(path.clone()));
            }
        }

        Ok(Self {
            blueprint,
            metadata,
            required_paths,
        })
    }

    /// Path of the blueprint YAML document.
    pub fn blueprint(&self) -> &Path {
        &self.blueprint
    }

    /// Path of the HACS JSON descriptor.
    pub fn metadata(&self) -> &Path {
        &self.metadata
    }

    /// Paths that must exist, in reporting order.
    pub fn required_paths(&self) -> &[PathBuf] {
        &self.required_paths
    }
}

#[derive(Deserialize)]
struct LayoutFields {
    blueprint: PathBuf,
    metadata: PathBuf,
    required_paths: Vec<PathBuf>,
}

impl TryFrom<LayoutFields> for RepoLayout {
    type Error = LayoutError;

    fn try_from(fields: LayoutFields) -> Result<Self, Self::Error> {
        RepoLayout::new(fields.blueprint, fields.metadata, fields.required_paths)
    }
}

impl Default for RepoLayout {
    fn default() -> Self {
        Self {
            blueprint: PathBuf::from(BLUEPRINT_PATH),
            metadata: PathBuf::from(METADATA_PATH),
            required_paths: [BLUEPRINT_PATH, METADATA_PATH, README_PATH, WORKFLOW_PATH]
                .iter()
                .map(PathBuf::from)
                .collect(),
        }
    }
}
