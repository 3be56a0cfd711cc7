//! # Error Hierarchy
//!
//! Structured error types for layout construction, built with `thiserror`.
//! Validation findings are not errors; they travel as
//! [`Diagnostic`](crate::Diagnostic)s.

use std::path::PathBuf;

use thiserror::Error;

/// A [`RepoLayout`](crate::RepoLayout) violated one of its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The required-path set was empty.
    #[error("required-path set must not be empty")]
    EmptyRequiredPaths,

    /// A layout path was absolute; every path is resolved against the
    /// repository root.
    #[error("layout path must be relative: {}", .0.display())]
    AbsolutePath(PathBuf),
}
