//! # Console Report
//!
//! Renders a [`RunReport`] as the line-oriented text the release workflow
//! greps for. Layout:
//!
//! ```text
//! 🚀 Starting Integration Watchdog validation...
//!
//! 🔍 Validating repository structure...
//! ✅ Repository structure validation passed
//!
//! 🔍 Validating hacs.json...
//! ...
//!
//! 🎉 All validations passed! Ready for release.
//! ```

use std::io::{self, Write};

use crate::runner::RunReport;

/// First line of every report.
pub const START_BANNER: &str = "🚀 Starting Integration Watchdog validation...";

/// Last line when every check passed.
pub const SUCCESS_BANNER: &str = "🎉 All validations passed! Ready for release.";

/// Last line when any check failed.
pub const FAILURE_BANNER: &str = "💥 Some validations failed. Please fix the issues above.";

/// Write `report` to `out`.
pub fn write_report<W: Write>(report: &RunReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "{START_BANNER}")?;
    writeln!(out)?;

    for check in report.checks() {
        writeln!(out, "🔍 Validating {}...", check.subject)?;
        for diagnostic in check.outcome.diagnostics() {
            writeln!(out, "{diagnostic}")?;
        }
        writeln!(out)?;
    }

    if report.passed() {
        writeln!(out, "{SUCCESS_BANNER}")?;
    } else {
        writeln!(out, "{FAILURE_BANNER}")?;
    }
    out.flush()
}
