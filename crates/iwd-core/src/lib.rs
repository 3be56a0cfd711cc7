#![deny(missing_docs)]

//! # iwd-core: Foundational Types for the Integration Watchdog Validator
//!
//! This crate defines the types shared by every other crate in the
//! workspace. It has no internal crate dependencies, only `serde` and
//! `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Checkers return data, never print.** Every check produces a
//!    [`CheckOutcome`]: a pass/fail flag plus an ordered list of
//!    [`Diagnostic`] records. Rendering to a terminal is the runner's job.
//!
//! 2. **No fault crosses a check boundary.** [`Check::run`] is infallible
//!    by signature. Each implementation downgrades its own read, parse, and
//!    shape errors into diagnostics.
//!
//! 3. **One layout definition.** [`RepoLayout`] is the single source of the
//!    conventional file locations. Nothing else hard-codes them.

pub mod check;
pub mod diagnostic;
pub mod error;
pub mod layout;

pub use check::Check;
pub use diagnostic::{CheckOutcome, Diagnostic, Severity};
pub use error::LayoutError;
pub use layout::{RepoLayout, BLUEPRINT_PATH, METADATA_PATH, README_PATH, WORKFLOW_PATH};
