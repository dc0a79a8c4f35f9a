use indexmap::IndexMap;

use crate::config::ComponentsMode;
use crate::description::components::{ComponentGroup, Schema, SchemaProperty};
use crate::description::security::{SecurityFlow, SecurityScheme, SecurityScope};
use crate::document::{
    Components, FlowObject, PropertyObject, SchemaObject, SecuritySchemeObject, XmlObject,
};

use super::presence::{present, present_cloned};

/// Build the components object from the registered groups.
///
/// With [`ComponentsMode::LastGroup`] every group replaces `schemas` and
/// `securitySchemes` wholesale, so only the final group is visible in the
/// output. [`ComponentsMode::Merge`] folds all groups together by name.
pub fn build_components(groups: &[ComponentGroup], mode: ComponentsMode) -> Components {
    let mut components = Components::default();

    for group in groups {
        let schemas = build_schemas(&group.schemas);
        let security_schemes = build_security_schemes(&group.security_schemes);

        match mode {
            ComponentsMode::LastGroup => {
                components.schemas = Some(schemas);
                components.security_schemes = Some(security_schemes);
            }
            ComponentsMode::Merge => {
                components
                    .schemas
                    .get_or_insert_with(IndexMap::new)
                    .extend(schemas);
                components
                    .security_schemes
                    .get_or_insert_with(IndexMap::new)
                    .extend(security_schemes);
            }
        }
    }

    if mode == ComponentsMode::LastGroup && groups.len() > 1 {
        log::debug!(
            "{} component groups registered, only the last one is kept",
            groups.len()
        );
    }

    components
}

pub fn build_schemas(schemas: &[Schema]) -> IndexMap<String, SchemaObject> {
    schemas
        .iter()
        .map(|s| (s.name.clone(), build_schema(s)))
        .collect()
}

fn build_schema(schema: &Schema) -> SchemaObject {
    SchemaObject {
        schema_type: schema.schema_type.clone(),
        properties: build_properties(&schema.properties),
        ref_path: schema.ref_path.clone(),
        xml: present_cloned(&schema.xml.name).map(|name| XmlObject { name }),
    }
}

pub fn build_properties(properties: &[SchemaProperty]) -> IndexMap<String, PropertyObject> {
    properties
        .iter()
        .map(|prop| {
            (
                prop.name.clone(),
                PropertyObject {
                    property_type: present_cloned(&prop.property_type),
                    format: present_cloned(&prop.format),
                    description: present_cloned(&prop.description),
                    enum_values: present_cloned(&prop.enum_values),
                    default_value: prop.default_value.clone().and_then(present),
                },
            )
        })
        .collect()
}

/// Security schemes keyed by scheme name.
///
/// `name` is only emitted for schemes without flows; flow-based schemes are
/// described entirely by their flows.
pub fn build_security_schemes(
    schemes: &[SecurityScheme],
) -> IndexMap<String, SecuritySchemeObject> {
    schemes
        .iter()
        .map(|ss| {
            let has_flows = !ss.flows.is_empty();
            let scheme = SecuritySchemeObject {
                name: present_cloned(&ss.name).filter(|_| !has_flows),
                scheme_type: present_cloned(&ss.scheme_type),
                location: present_cloned(&ss.location),
                flows: has_flows.then(|| build_flows(&ss.flows)),
            };
            (ss.name.clone(), scheme)
        })
        .collect()
}

fn build_flows(flows: &[SecurityFlow]) -> IndexMap<String, FlowObject> {
    flows
        .iter()
        .map(|flow| {
            (
                flow.flow_type.clone(),
                FlowObject {
                    authorization_url: flow.auth_url.clone(),
                    scopes: build_scopes(&flow.scopes),
                },
            )
        })
        .collect()
}

/// Scopes with an empty name are dropped along with their description.
pub fn build_scopes(scopes: &[SecurityScope]) -> IndexMap<String, String> {
    scopes
        .iter()
        .filter(|scope| !scope.name.is_empty())
        .map(|scope| (scope.name.clone(), scope.description.clone()))
        .collect()
}
