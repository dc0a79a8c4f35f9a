use serde::{Deserialize, Serialize};

use super::components::ComponentGroup;
use super::operation::PathEntry;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "termsOfService", skip_serializing_if = "String::is_empty")]
    pub terms_of_service: String,

    #[serde(skip_serializing_if = "Contact::is_empty")]
    pub contact: Contact,

    #[serde(skip_serializing_if = "License::is_empty")]
    pub license: License,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// Contact information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
    }
}

/// License information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl License {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty()
    }
}

/// Link to documentation hosted outside the generated document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDocs {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl ExternalDocs {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.url.is_empty()
    }
}

/// A server URL.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "externalDocs", skip_serializing_if = "ExternalDocs::is_empty")]
    pub external_docs: ExternalDocs,
}

/// The in-memory description of an HTTP API that gets turned into an
/// OpenAPI document.
///
/// Unlike the document it produces, the description is list oriented:
/// routes, component groups, security requirements and scopes are plain
/// vectors in the order the caller registered them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDescription {
    pub openapi: String,

    pub info: Info,

    #[serde(rename = "externalDocs")]
    pub external_docs: ExternalDocs,

    pub servers: Vec<Server>,

    pub tags: Vec<Tag>,

    pub paths: Vec<PathEntry>,

    pub components: Vec<ComponentGroup>,
}

impl ApiDescription {
    /// Register another route. Entries are kept in call order.
    pub fn add_path(&mut self, entry: PathEntry) -> &mut Self {
        self.paths.push(entry);
        self
    }

    /// Register another component group.
    pub fn add_component_group(&mut self, group: ComponentGroup) -> &mut Self {
        self.components.push(group);
        self
    }
}
