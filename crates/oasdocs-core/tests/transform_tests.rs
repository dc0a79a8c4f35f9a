use oasdocs_core::config::ComponentsMode;
use oasdocs_core::description;
use oasdocs_core::description::components::{ComponentGroup, Schema, SchemaProperty};
use oasdocs_core::description::operation::{ContentEntry, PathEntry, ResponseEntry};
use oasdocs_core::description::security::{
    SecurityFlow, SecurityRequirement, SecurityScheme, SecurityScope,
};
use oasdocs_core::description::spec::ApiDescription;
use oasdocs_core::document::{
    MediaTypeObject, Operation, RequestBodyObject, ResponseObject, SchemaRef,
};
use oasdocs_core::persist;
use oasdocs_core::transform::{self, TransformOptions};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

fn list_users() -> PathEntry {
    PathEntry {
        operation_id: "listUsers".to_string(),
        responses: vec![ResponseEntry {
            code: 200,
            description: "OK".to_string(),
            content: vec![ContentEntry::new(
                "application/json",
                "#/components/schemas/User",
            )],
        }],
        ..PathEntry::new("GET", "/users")
    }
}

fn users_description() -> ApiDescription {
    let mut desc = ApiDescription {
        openapi: "3.0.3".to_string(),
        ..ApiDescription::default()
    };
    desc.info.title = "Users".to_string();
    desc.info.version = "1.0.0".to_string();
    desc.add_path(list_users());
    desc
}

#[test]
fn transform_users_scenario() {
    let doc = transform::transform(&users_description());

    assert_eq!(doc.paths.len(), 1);
    let methods = &doc.paths["/users"];
    assert_eq!(methods.len(), 1);

    let mut content = indexmap::IndexMap::new();
    content.insert(
        "application/json".to_string(),
        MediaTypeObject {
            schema: SchemaRef {
                ref_path: "#/components/schemas/User".to_string(),
            },
        },
    );
    let mut responses = indexmap::IndexMap::new();
    responses.insert(
        200,
        ResponseObject {
            description: "OK".to_string(),
            content,
        },
    );
    let expected = Operation {
        tags: vec![],
        summary: String::new(),
        operation_id: "listUsers".to_string(),
        security: vec![],
        request_body: RequestBodyObject::default(),
        responses,
    };
    assert_eq!(methods["get"], expected);
}

#[test]
fn users_scenario_yaml() {
    let doc = transform::transform(&users_description());
    let yaml = persist::to_yaml(&doc).unwrap();
    insta::assert_snapshot!(yaml, @r###"
    openapi: 3.0.3
    info:
      title: Users
      version: 1.0.0
    externalDocs: {}
    servers: []
    tags: []
    paths:
      /users:
        get:
          tags: []
          summary: ''
          operationId: listUsers
          security: []
          requestBody:
            description: ''
            content: {}
          responses:
            200:
              description: OK
              content:
                application/json:
                  schema:
                    $ref: '#/components/schemas/User'
    components: {}
    "###);
}

#[test]
fn distinct_methods_share_a_route() {
    let mut desc = ApiDescription::default();
    for method in ["GET", "post", "Put", "DELETE"] {
        desc.add_path(PathEntry::new(method, "/pets"));
    }
    let doc = transform::transform(&desc);

    let methods = &doc.paths["/pets"];
    assert_eq!(
        methods.keys().collect::<Vec<_>>(),
        ["get", "post", "put", "delete"]
    );
    assert_eq!(doc.operation_count(), 4);
    assert!(doc.operation("/pets", "PUT").is_some());
}

#[test]
fn later_route_method_pair_wins() {
    let mut desc = ApiDescription::default();
    desc.add_path(PathEntry {
        summary: "old".to_string(),
        tags: vec!["a".to_string()],
        ..PathEntry::new("GET", "/pets")
    });
    desc.add_path(PathEntry {
        summary: "new".to_string(),
        ..PathEntry::new("get", "/pets")
    });
    let doc = transform::transform(&desc);

    let get = doc.operation("/pets", "get").unwrap();
    assert_eq!(get.summary, "new");
    assert!(get.tags.is_empty(), "later entry fully replaces the earlier one");
}

#[test]
fn security_list_mirrors_requirements() {
    let mut desc = ApiDescription::default();
    desc.add_path(PathEntry {
        security: vec![
            SecurityRequirement::new("oauth", ["a", "b"]),
            SecurityRequirement::new("key", Vec::<String>::new()),
            SecurityRequirement::new("oauth", ["c"]),
        ],
        ..PathEntry::new("GET", "/pets")
    });
    let doc = transform::transform(&desc);

    let security = &doc.operation("/pets", "get").unwrap().security;
    assert_eq!(security.len(), 3);
    let names: Vec<_> = security
        .iter()
        .map(|m| {
            assert_eq!(m.len(), 1);
            m.keys().next().unwrap().as_str()
        })
        .collect();
    assert_eq!(names, ["oauth", "key", "oauth"]);
    assert_eq!(security[0]["oauth"], ["a", "b"]);
}

#[test]
fn bare_property_renders_only_its_name() {
    let mut desc = ApiDescription::default();
    desc.add_component_group(ComponentGroup {
        schemas: vec![Schema {
            name: "Thing".to_string(),
            properties: vec![SchemaProperty {
                name: "anything".to_string(),
                ..SchemaProperty::default()
            }],
            ..Schema::default()
        }],
        ..ComponentGroup::default()
    });
    let doc = transform::transform(&desc);
    let yaml = persist::to_yaml(&doc).unwrap();

    assert!(yaml.contains("anything: {}"), "got:\n{yaml}");
    let thing = &doc.components.schemas.as_ref().unwrap()["Thing"];
    assert!(thing.properties["anything"].is_bare());
}

#[test]
fn flow_schemes_never_carry_name() {
    let mut desc = ApiDescription::default();
    desc.add_component_group(ComponentGroup {
        security_schemes: vec![SecurityScheme {
            name: "oauth".to_string(),
            scheme_type: "oauth2".to_string(),
            location: String::new(),
            flows: vec![SecurityFlow {
                flow_type: "implicit".to_string(),
                auth_url: "https://example.com/authorize".to_string(),
                scopes: vec![
                    SecurityScope::new("", "no name"),
                    SecurityScope::new("read", "read access"),
                ],
            }],
        }],
        ..ComponentGroup::default()
    });
    let doc = transform::transform(&desc);

    let schemes = doc.components.security_schemes.as_ref().unwrap();
    let oauth = &schemes["oauth"];
    assert_eq!(oauth.name, None);
    let scopes = &oauth.flows.as_ref().unwrap()["implicit"].scopes;
    assert_eq!(scopes.len(), 1);
    assert_eq!(scopes["read"], "read access");

    let yaml = persist::to_yaml(&doc).unwrap();
    assert!(!yaml.contains("name: oauth"), "got:\n{yaml}");
    assert!(!yaml.contains("no name"), "got:\n{yaml}");
}

#[test]
fn last_component_group_wins_by_default() {
    let mut desc = ApiDescription::default();
    desc.add_component_group(ComponentGroup {
        schemas: vec![Schema {
            name: "A".to_string(),
            ..Schema::default()
        }],
        ..ComponentGroup::default()
    });
    desc.add_component_group(ComponentGroup {
        schemas: vec![Schema {
            name: "B".to_string(),
            ..Schema::default()
        }],
        security_schemes: vec![SecurityScheme {
            name: "apiKey".to_string(),
            scheme_type: "apiKey".to_string(),
            location: "header".to_string(),
            flows: vec![],
        }],
    });

    let doc = transform::transform(&desc);
    let schemas = doc.components.schemas.as_ref().unwrap();
    assert_eq!(schemas.keys().collect::<Vec<_>>(), ["B"]);
    assert!(
        doc.components
            .security_schemes
            .as_ref()
            .unwrap()
            .contains_key("apiKey")
    );

    let merged = transform::transform_with_options(
        &desc,
        &TransformOptions {
            components: ComponentsMode::Merge,
        },
    );
    let schemas = merged.components.schemas.as_ref().unwrap();
    assert_eq!(schemas.keys().collect::<Vec<_>>(), ["A", "B"]);
}

#[test]
fn transform_petstore_fixture() {
    let desc = description::from_yaml(PETSTORE).unwrap();
    let doc = transform::transform(&desc);

    assert_eq!(doc.info.title, "Swagger Petstore");
    assert_eq!(doc.paths.keys().collect::<Vec<_>>(), ["/pet", "/store/inventory"]);
    assert_eq!(doc.paths["/pet"].keys().collect::<Vec<_>>(), ["put", "post"]);

    let put = doc.operation("/pet", "put").unwrap();
    assert_eq!(put.request_body.description, "Update an existent pet in the store");
    assert_eq!(put.responses.keys().copied().collect::<Vec<_>>(), [200, 404]);
    assert!(put.responses[&404u16].content.is_empty());

    // Only the second component group survives.
    let schemas = doc.components.schemas.as_ref().unwrap();
    assert!(!schemas.contains_key("Category"));
    let pet = &schemas["Pet"];
    assert_eq!(pet.xml.as_ref().map(|x| x.name.as_str()), Some("pet"));
    assert_eq!(
        pet.properties["status"].default_value,
        Some(serde_json::json!("available"))
    );

    let schemes = doc.components.security_schemes.as_ref().unwrap();
    assert_eq!(schemes["api_key"].name.as_deref(), Some("api_key"));
    assert_eq!(schemes["api_key"].location.as_deref(), Some("header"));
    let implicit = &schemes["petstore_auth"].flows.as_ref().unwrap()["implicit"];
    assert_eq!(implicit.scopes.len(), 2);
}

#[test]
fn transform_does_not_alias_input() {
    let mut desc = users_description();
    let doc = transform::transform(&desc);
    desc.paths[0].operation_id = "changed".to_string();
    desc.info.title = "changed".to_string();

    assert_eq!(doc.operation("/users", "get").unwrap().operation_id, "listUsers");
    assert_eq!(doc.info.title, "Users");
}
