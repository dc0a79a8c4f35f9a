pub mod components;
pub mod operation;
pub mod security;
pub mod spec;

use std::fs;
use std::path::Path;

use crate::error::ParseError;
use spec::ApiDescription;

/// Parse an API description from YAML.
pub fn from_yaml(input: &str) -> Result<ApiDescription, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse an API description from JSON.
pub fn from_json(input: &str) -> Result<ApiDescription, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Read and parse a description file. `.json` files are parsed as JSON,
/// everything else as YAML.
pub fn from_path(path: &Path) -> Result<ApiDescription, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json(&content),
        _ => from_yaml(&content),
    }
}
