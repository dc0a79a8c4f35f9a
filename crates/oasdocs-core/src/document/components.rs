use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Components object holding reusable definitions.
///
/// Both keys are `None` only when the description has no component groups,
/// in which case the document carries `components: {}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, SchemaObject>>,

    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub security_schemes: Option<IndexMap<String, SecuritySchemeObject>>,
}

/// A component schema. `type`, `properties` and `$ref` are always emitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaObject {
    #[serde(rename = "type")]
    pub schema_type: String,

    pub properties: IndexMap<String, PropertyObject>,

    #[serde(rename = "$ref")]
    pub ref_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<XmlObject>,
}

/// XML metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XmlObject {
    pub name: String,
}

/// A schema property; every key is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyObject {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
}

impl PropertyObject {
    /// True when no optional key would be emitted.
    pub fn is_bare(&self) -> bool {
        self.property_type.is_none()
            && self.format.is_none()
            && self.description.is_none()
            && self.enum_values.is_none()
            && self.default_value.is_none()
    }
}

/// A security scheme definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SecuritySchemeObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,

    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flows: Option<IndexMap<String, FlowObject>>,
}

/// A single OAuth flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowObject {
    #[serde(rename = "authorizationUrl")]
    pub authorization_url: String,

    pub scopes: IndexMap<String, String>,
}
