//! # HACS Metadata Check
//!
//! Validates `hacs.json`, the descriptor HACS reads when listing the
//! repository. Required fields are checked in [`REQUIRED_FIELDS`] order and
//! only the first missing one is reported. `domains` must list
//! [`REQUIRED_DOMAIN`].
//!
//! A truthy `content_in_root` produces a warning: the blueprint lives under
//! `blueprints/`, not at the repository root. The warning never fails the
//! check.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use iwd_core::{Check, CheckOutcome, Diagnostic, RepoLayout};

use crate::document::{json_kind, load_json};
use crate::error::{DocumentError, ShapeError};

/// Fields `hacs.json` must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "domains", "homeassistant"];

/// The domain `hacs.json` must list.
pub const REQUIRED_DOMAIN: &str = "automation";

/// The first rule a parsed `hacs.json` breaks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataViolation {
    /// A required field is missing.
    #[error("Missing required HACS field: {0}")]
    MissingField(&'static str),

    /// `domains` does not list `automation`. Carries the actual value.
    #[error("HACS domains must include 'automation', got: {0}")]
    MissingDomain(Value),

    /// The document does not have the expected shape.
    #[error("HACS validation failed: {0}")]
    Shape(#[from] ShapeError),
}

/// Apply the metadata rules to a parsed descriptor.
///
/// On success returns the non-fatal warnings, in emission order.
pub fn evaluate_metadata(document: &Value) -> Result<Vec<Diagnostic>, MetadataViolation> {
    let fields = document.as_object().ok_or(ShapeError::NotAnObject {
        what: "hacs.json root",
        found: json_kind(document),
    })?;

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(field) {
            return Err(MetadataViolation::MissingField(field));
        }
    }

    let domains = &fields["domains"];
    if !lists_domain(domains, REQUIRED_DOMAIN) {
        return Err(MetadataViolation::MissingDomain(domains.clone()));
    }

    let mut warnings = Vec::new();
    if content_in_root(fields) {
        warnings.push(Diagnostic::warning(
            "Warning: content_in_root should be false for organized structure",
        ));
    }
    Ok(warnings)
}

fn lists_domain(domains: &Value, domain: &str) -> bool {
    domains
        .as_array()
        .is_some_and(|list| list.iter().any(|d| d.as_str() == Some(domain)))
}

fn content_in_root(fields: &Map<String, Value>) -> bool {
    fields.get("content_in_root").is_some_and(is_truthy)
}

/// JSON truthiness: `false`, `null`, zero, and empty strings, arrays, and
/// objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Checks the HACS JSON descriptor.
#[derive(Debug, Clone)]
pub struct MetadataCheck {
    path: PathBuf,
}

impl MetadataCheck {
    /// Check the descriptor at the layout's metadata path.
    pub fn new(layout: &RepoLayout) -> Self {
        Self {
            path: layout.metadata().to_path_buf(),
        }
    }

    /// The descriptor path, relative to the repository root.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Check for MetadataCheck {
    fn subject(&self) -> &str {
        "hacs.json"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let full_path = root.join(&self.path);
        if !full_path.exists() {
            tracing::debug!(path = %full_path.display(), "HACS config not found");
            return CheckOutcome::fail(Diagnostic::error(format!(
                "HACS config file not found: {}",
                self.path.display()
            )));
        }

        let document = match load_json(&full_path) {
            Ok(document) => document,
            Err(e @ DocumentError::Read { .. }) => {
                return CheckOutcome::fail(Diagnostic::error(format!(
                    "HACS validation failed: {e}"
                )));
            }
            Err(e) => {
                return CheckOutcome::fail(Diagnostic::error(format!("JSON parsing error: {e}")));
            }
        };

        match evaluate_metadata(&document) {
            Ok(mut diagnostics) => {
                diagnostics.push(Diagnostic::info("HACS configuration validation passed"));
                CheckOutcome::pass(diagnostics)
            }
            Err(violation) => {
                tracing::debug!(%violation, "HACS config rejected");
                CheckOutcome::fail(Diagnostic::error(violation.to_string()))
            }
        }
    }
}
