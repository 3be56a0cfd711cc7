//! # Blueprint Check
//!
//! Validates the automation blueprint YAML. The rules are a cascade; the
//! first failing rule ends the check:
//!
//! 1. The file exists.
//! 2. It parses under the `!input`-aware [`yaml`](crate::yaml) loader.
//! 3. Top-level keys [`REQUIRED_KEYS`] are present, checked in order.
//! 4. `blueprint.domain` is exactly [`BLUEPRINT_DOMAIN`].
//! 5. Blueprint keys [`REQUIRED_BLUEPRINT_KEYS`] are present, in order.
//! 6. Input keys [`REQUIRED_INPUTS`] are present in `blueprint.input`, in order.
//!
//! Only the first missing key at each level is reported.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use iwd_core::{Check, CheckOutcome, Diagnostic, RepoLayout};

use crate::document::yaml_kind;
use crate::error::{DocumentError, ShapeError};
use crate::yaml;

/// Keys the blueprint document must carry at the top level.
pub const REQUIRED_KEYS: [&str; 3] = ["blueprint", "trigger", "action"];

/// Keys the `blueprint` section must carry.
pub const REQUIRED_BLUEPRINT_KEYS: [&str; 2] = ["name", "input"];

/// Inputs the blueprint must declare.
pub const REQUIRED_INPUTS: [&str; 3] = ["issue_sensor", "notify_service", "max_reload_attempts"];

/// The only accepted value of `blueprint.domain`.
pub const BLUEPRINT_DOMAIN: &str = "automation";

/// The first rule a parsed blueprint document breaks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlueprintViolation {
    /// A top-level key is missing.
    #[error("Missing required key: {0}")]
    MissingKey(&'static str),

    /// `blueprint.domain` is absent or not `automation`.
    #[error("Blueprint domain must be 'automation', got: {}", describe_domain(.0))]
    WrongDomain(Option<Value>),

    /// A key of the `blueprint` section is missing.
    #[error("Missing required blueprint key: {0}")]
    MissingBlueprintKey(&'static str),

    /// A required input is not declared.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// The document does not have the expected shape.
    #[error("Blueprint validation failed: {0}")]
    Shape(#[from] ShapeError),
}

/// Apply the blueprint rules to a parsed document.
pub fn evaluate_blueprint(document: &Value) -> Result<(), BlueprintViolation> {
    let root = expect_mapping(document, "document root")?;
    for key in REQUIRED_KEYS {
        if !root.contains_key(key) {
            return Err(BlueprintViolation::MissingKey(key));
        }
    }

    let blueprint = section(root, "blueprint", "`blueprint`")?;
    match blueprint.get("domain") {
        Some(Value::String(domain)) if domain == BLUEPRINT_DOMAIN => {}
        other => return Err(BlueprintViolation::WrongDomain(other.cloned())),
    }

    for key in REQUIRED_BLUEPRINT_KEYS {
        if !blueprint.contains_key(key) {
            return Err(BlueprintViolation::MissingBlueprintKey(key));
        }
    }

    let inputs = section(blueprint, "input", "`blueprint.input`")?;
    for key in REQUIRED_INPUTS {
        if !inputs.contains_key(key) {
            return Err(BlueprintViolation::MissingInput(key));
        }
    }

    Ok(())
}

fn section<'a>(
    mapping: &'a Mapping,
    key: &str,
    what: &'static str,
) -> Result<&'a Mapping, ShapeError> {
    match mapping.get(key) {
        Some(value) => expect_mapping(value, what),
        None => Err(ShapeError::NotAMapping {
            what,
            found: "nothing",
        }),
    }
}

fn expect_mapping<'a>(value: &'a Value, what: &'static str) -> Result<&'a Mapping, ShapeError> {
    value.as_mapping().ok_or(ShapeError::NotAMapping {
        what,
        found: yaml_kind(value),
    })
}

fn describe_domain(domain: &Option<Value>) -> String {
    match domain {
        None => "(absent)".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// Checks the blueprint YAML document.
#[derive(Debug, Clone)]
pub struct BlueprintCheck {
    path: PathBuf,
}

impl BlueprintCheck {
    /// Check the blueprint at the layout's blueprint path.
    pub fn new(layout: &RepoLayout) -> Self {
        Self {
            path: layout.blueprint().to_path_buf(),
        }
    }

    /// The blueprint path, relative to the repository root.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Check for BlueprintCheck {
    fn subject(&self) -> &str {
        "blueprint YAML"
    }

    fn run(&self, root: &Path) -> CheckOutcome {
        let full_path = root.join(&self.path);
        if !full_path.exists() {
            tracing::debug!(path = %full_path.display(), "blueprint not found");
            return CheckOutcome::fail(Diagnostic::error(format!(
                "Blueprint file not found: {}",
                self.path.display()
            )));
        }

        let document = match yaml::load(&full_path) {
            Ok(document) => document,
            Err(e @ DocumentError::Read { .. }) => {
                return CheckOutcome::fail(Diagnostic::error(format!(
                    "Blueprint validation failed: {e}"
                )));
            }
            Err(e) => {
                return CheckOutcome::fail(Diagnostic::error(format!("YAML parsing error: {e}")));
            }
        };
        tracing::debug!(
            path = %full_path.display(),
            kind = yaml_kind(&document),
            "parsed blueprint"
        );

        match evaluate_blueprint(&document) {
            Ok(()) => {
                CheckOutcome::pass(vec![Diagnostic::info("Blueprint YAML validation passed")])
            }
            Err(violation) => {
                tracing::debug!(%violation, "blueprint rejected");
                CheckOutcome::fail(Diagnostic::error(violation.to_string()))
            }
        }
    }
}
