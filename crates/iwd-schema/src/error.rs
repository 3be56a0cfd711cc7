//! # Check Errors
//!
//! Faults raised while loading or inspecting a document. None of these
//! escape a check: each check converts them into diagnostics at its
//! boundary.

use std::path::PathBuf;

use thiserror::Error;

/// A document could not be read or parsed.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax error.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A YAML tag could not be constructed.
    #[error("{0}")]
    Tag(#[from] TagError),

    /// JSON syntax error.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl DocumentError {
    /// Whether the document was read but its content is malformed.
    pub fn is_syntax(&self) -> bool {
        !matches!(self, Self::Read { .. })
    }
}

/// A tagged YAML node the loader has no constructor for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// No constructor is registered for this tag.
    #[error("could not determine a constructor for the tag '{0}'")]
    Unsupported(String),

    /// The tag was applied to a sequence or mapping.
    #[error("tag '{tag}' expects a scalar node, found a {found}")]
    NonScalar {
        /// The tag as written.
        tag: String,
        /// Kind of node it was applied to.
        found: &'static str,
    },
}

/// A parsed document does not have the shape the rules expect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A YAML node that must be a mapping is something else.
    #[error("{what} must be a mapping, found {found}")]
    NotAMapping {
        /// Location of the node, e.g. `` `blueprint.input` ``.
        what: &'static str,
        /// Kind of node actually found.
        found: &'static str,
    },

    /// A JSON value that must be an object is something else.
    #[error("{what} must be an object, found {found}")]
    NotAnObject {
        /// Location of the value.
        what: &'static str,
        /// Kind of value actually found.
        found: &'static str,
    },
}
