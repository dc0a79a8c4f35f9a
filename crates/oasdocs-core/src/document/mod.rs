//! The canonical OpenAPI document produced by the transform.
//!
//! Every type here is a closed record mirroring one OAS object, so the
//! serialized shape is fixed at compile time. Optional attributes are
//! `Option`s that are skipped when `None`, and mappings are `IndexMap`s so
//! YAML output keeps the insertion order chosen by the transform.

pub mod components;
pub mod operations;

pub use components::*;
pub use operations::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::description::spec::{Contact, ExternalDocs, Info, License, Server, Tag};

/// Route → lower-case method → operation.
pub type Paths = IndexMap<String, PathMethods>;

/// Lower-case HTTP method → operation.
pub type PathMethods = IndexMap<String, Operation>;

/// A complete OpenAPI document, ready for serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,

    pub info: Info,

    #[serde(rename = "externalDocs")]
    pub external_docs: ExternalDocs,

    pub servers: Vec<Server>,

    pub tags: Vec<Tag>,

    pub paths: Paths,

    pub components: Components,
}

impl OpenApiDocument {
    /// Look up the operation registered for `route` and `method`.
    /// The method is matched case-insensitively.
    pub fn operation(&self, route: &str, method: &str) -> Option<&Operation> {
        self.paths
            .get(route)
            .and_then(|methods| methods.get(&method.to_lowercase()))
    }

    /// Number of operations across all routes.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }
}
