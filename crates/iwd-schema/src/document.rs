//! Document loading shared by the checks.

use std::path::Path;

use crate::error::DocumentError;

/// Read a whole document into memory. The file handle is closed before
/// this returns, on every path.
pub fn read_source(path: &Path) -> Result<String, DocumentError> {
    std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON document.
pub fn load_json(path: &Path) -> Result<serde_json::Value, DocumentError> {
    let content = read_source(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(value)
}

/// Name of a JSON value's kind, for shape diagnostics.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Name of a YAML node's kind, for shape diagnostics.
pub fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged node",
    }
}
