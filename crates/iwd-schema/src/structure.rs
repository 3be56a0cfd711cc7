//! # Repository Structure Check
//!
//! Confirms every path in the layout's required-path set exists. Content is
//! not inspected. Unlike the document checks, every missing path is listed.

use std::path::{Path, PathBuf};

use iwd_core::{Check, CheckOutcome, Diagnostic, RepoLayout};

/// Checks that the required release paths exist.
#[derive(Debug, Clone)]
pub struct StructureCheck {
    required: Vec<PathBuf>,
}

impl StructureCheck {
    /// Check the layout's required-path set.
    pub fn new(layout: &RepoLayout) -> Self {
        Self {
            required: layout.required_paths().to_vec(),
        }
    }

    /// Required paths that do not exist under `root`, in layout order.
    pub fn missing_paths(&self, root: &Path) -> Vec<&Path> {
        self.required
            .iter()
            .filter(|path| !root.join(path).exists())
            .map(PathBuf::as_path)
            .collect()
    }
}

impl Check for StructureCheck {
    fn subject(&self) -> &str {
        "repository structure"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let missing = self.missing_paths(root);
        tracing::debug!(
            required = self.required.len(),
            missing = missing.len(),
            "probed required paths"
        );

        if missing.is_empty() {
            return CheckOutcome::pass(vec![Diagnostic::info(
                "Repository structure validation passed",
            )]);
        }

        let mut diagnostics = Vec::with_capacity(missing.len() + 1);
        diagnostics.push(Diagnostic::error("Missing required files/directories:"));
        diagnostics.extend(
            missing
                .iter()
                .map(|path| Diagnostic::error_item(path.display().to_string())),
        );
        CheckOutcome::fail_with(diagnostics)
    }
}
