//! # The Check Seam
//!
//! Every validator component implements [`Check`]. The runner holds them as
//! `&dyn Check` and calls each one exactly once, in order.

use std::path::Path;

use crate::diagnostic::CheckOutcome;

/// A single validation component.
///
/// Implementations read whatever they need relative to `root`, validate it,
/// and report through the returned [`CheckOutcome`]. They must not panic and
/// must not print.
pub trait Check {
    /// Short noun phrase naming what is inspected, e.g. `"hacs.json"`.
    ///
    /// Rendered as `🔍 Validating <subject>...` before the check's diagnostics.
    fn subject(&self) -> &str;

    /// Run the check against the repository rooted at `root`.
    fn run(&self, root: &Path) -> CheckOutcome;
}
