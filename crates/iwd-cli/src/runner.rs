//! # Runner
//!
//! Runs the structure, metadata, and blueprint checks in that order. Every
//! check runs regardless of earlier failures, so one invocation surfaces
//! every category of problem. The overall verdict is the conjunction of
//! the three.

use std::path::Path;

use iwd_core::{Check, CheckOutcome, RepoLayout};
use iwd_schema::{BlueprintCheck, MetadataCheck, StructureCheck};

/// Sequences the release checks against one layout.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    layout: RepoLayout,
}

impl Runner {
    /// A runner over `layout`.
    pub fn new(layout: RepoLayout) -> Self {
        Self { layout }
    }

    /// Run every check against the repository at `root`.
    pub fn run(&self, root: &Path) -> RunReport {
        let structure = StructureCheck::new(&self.layout);
        let metadata = MetadataCheck::new(&self.layout);
        let blueprint = BlueprintCheck::new(&self.layout);
        let checks: [&dyn Check; 3] = [&structure, &metadata, &blueprint];

        let reports = checks
            .iter()
            .map(|check| {
                let outcome = check.run(root);
                tracing::info!(
                    subject = check.subject(),
                    passed = outcome.passed(),
                    "check finished"
                );
                CheckReport {
                    subject: check.subject().to_string(),
                    outcome,
                }
            })
            .collect();

        RunReport { checks: reports }
    }
}

/// One check's result, labelled for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// What the check inspected.
    pub subject: String,
    /// The check's outcome.
    pub outcome: CheckOutcome,
}

/// The results of a full run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    checks: Vec<CheckReport>,
}

impl RunReport {
    /// Per-check results in execution order.
    pub fn checks(&self) -> &[CheckReport] {
        &self.checks
    }

    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.outcome.passed())
    }

    /// Process exit status: 0 if every check passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
