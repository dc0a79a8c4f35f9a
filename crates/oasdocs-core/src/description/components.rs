use serde::{Deserialize, Serialize};

use super::security::SecurityScheme;

/// A group of reusable definitions. A description may register several.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentGroup {
    pub schemas: Vec<Schema>,

    #[serde(rename = "securitySchemes")]
    pub security_schemes: Vec<SecurityScheme>,
}

/// A named schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub name: String,

    #[serde(rename = "type")]
    pub schema_type: String,

    pub properties: Vec<SchemaProperty>,

    #[serde(rename = "$ref")]
    pub ref_path: String,

    pub xml: Xml,
}

/// XML metadata of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Xml {
    pub name: String,
}

/// A single schema property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaProperty {
    pub name: String,

    #[serde(rename = "type")]
    pub property_type: String,

    pub format: String,

    pub description: String,

    #[serde(rename = "enum")]
    pub enum_values: Vec<String>,

    #[serde(rename = "default")]
    pub default_value: Option<serde_json::Value>,
}

impl SchemaProperty {
    pub fn new(name: impl Into<String>, property_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            ..Self::default()
        }
    }
}
