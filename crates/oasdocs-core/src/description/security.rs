use serde::{Deserialize, Serialize};

/// A security requirement: the named scheme and the scopes it needs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityRequirement {
    #[serde(rename = "authName")]
    pub auth_name: String,

    #[serde(rename = "permTypes")]
    pub perm_types: Vec<String>,
}

impl SecurityRequirement {
    pub fn new<S: Into<String>>(
        auth_name: impl Into<String>,
        scopes: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            auth_name: auth_name.into(),
            perm_types: scopes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A security scheme definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityScheme {
    pub name: String,

    #[serde(rename = "type")]
    pub scheme_type: String,

    #[serde(rename = "in")]
    pub location: String,

    pub flows: Vec<SecurityFlow>,
}

/// An OAuth2-style flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityFlow {
    /// Flow type, e.g. `implicit`.
    #[serde(rename = "type")]
    pub flow_type: String,

    #[serde(rename = "authorizationUrl")]
    pub auth_url: String,

    pub scopes: Vec<SecurityScope>,
}

/// A named scope with its description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityScope {
    pub name: String,
    pub description: String,
}

impl SecurityScope {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
