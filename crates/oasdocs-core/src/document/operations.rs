use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single-entry mapping of scheme name → required scopes.
pub type SecurityRequirementObject = IndexMap<String, Vec<String>>;

/// Media type → schema reference.
pub type Content = IndexMap<String, MediaTypeObject>;

/// Status code → response. Codes serialize as plain integer keys.
pub type Responses = IndexMap<u16, ResponseObject>;

/// An API operation. All six keys are always emitted, even when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    pub tags: Vec<String>,

    pub summary: String,

    #[serde(rename = "operationId")]
    pub operation_id: String,

    pub security: Vec<SecurityRequirementObject>,

    #[serde(rename = "requestBody")]
    pub request_body: RequestBodyObject,

    pub responses: Responses,
}

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestBodyObject {
    pub description: String,
    pub content: Content,
}

/// A response definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseObject {
    pub description: String,
    pub content: Content,
}

/// A media type object holding a schema reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaTypeObject {
    pub schema: SchemaRef,
}

/// `{$ref: ...}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub ref_path: String,
}
