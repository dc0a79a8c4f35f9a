use serde::{Deserialize, Serialize};

use super::security::SecurityRequirement;

/// A media type paired with a schema reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentEntry {
    /// Media type, e.g. `application/json`.
    pub name: String,
    /// Reference path, e.g. `#/components/schemas/User`.
    pub schema: String,
}

impl ContentEntry {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }
}

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    pub description: String,
    pub content: Vec<ContentEntry>,
}

/// A response definition for one status code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseEntry {
    pub code: u16,
    pub description: String,
    pub content: Vec<ContentEntry>,
}

/// One route + method pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathEntry {
    pub route: String,

    /// HTTP method in any casing; emitted lower-cased.
    #[serde(rename = "httpMethod", alias = "method")]
    pub http_method: String,

    pub tags: Vec<String>,

    pub summary: String,

    #[serde(rename = "operationId")]
    pub operation_id: String,

    pub security: Vec<SecurityRequirement>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    pub responses: Vec<ResponseEntry>,
}

impl PathEntry {
    pub fn new(method: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            http_method: method.into(),
            ..Self::default()
        }
    }
}
