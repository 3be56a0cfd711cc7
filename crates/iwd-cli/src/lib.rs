//! # iwd-cli: Release Validator for the Integration Watchdog
//!
//! Provides the `iwd` command-line interface. Run it from the repository
//! root before tagging a release:
//!
//! ```bash
//! iwd        # exit 0: ready for release, exit 1: fix the reported issues
//! iwd -vv    # same report, plus debug logs on stderr
//! ```
//!
//! ## Crate Policy
//!
//! - Check logic lives in `iwd-schema`; this crate only sequences and renders.
//! - The report goes to stdout; tracing goes to stderr.
//! - Report lines are stable; the release workflow matches on them.

pub mod report;
pub mod runner;

pub use report::write_report;
pub use runner::{CheckReport, RunReport, Runner};
