use crate::description::operation::{ContentEntry, PathEntry, RequestBody, ResponseEntry};
use crate::description::security::SecurityRequirement;
use crate::document::{
    Content, MediaTypeObject, Operation, Paths, RequestBodyObject, ResponseObject, Responses,
    SchemaRef, SecurityRequirementObject,
};

/// Build the paths mapping.
///
/// Entries sharing a route merge into one route entry keyed by lower-cased
/// method. A later entry for the same route and method replaces the earlier
/// one in place.
pub fn build_paths(entries: &[PathEntry]) -> Paths {
    let mut paths = Paths::with_capacity(entries.len());

    for entry in entries {
        let method = entry.http_method.to_lowercase();
        let methods = paths.entry(entry.route.clone()).or_default();

        if methods.contains_key(&method) {
            log::debug!(
                "{} {} registered more than once, keeping the last entry",
                method,
                entry.route
            );
        }

        methods.insert(method, build_operation(entry));
    }

    paths
}

/// Build one operation. The six operation keys are always filled.
pub fn build_operation(entry: &PathEntry) -> Operation {
    Operation {
        tags: entry.tags.clone(),
        summary: entry.summary.clone(),
        operation_id: entry.operation_id.clone(),
        security: build_security(&entry.security),
        request_body: entry
            .request_body
            .as_ref()
            .map(build_request_body)
            .unwrap_or_default(),
        responses: build_responses(&entry.responses),
    }
}

/// One single-entry mapping per requirement, in input order. Requirements
/// naming the same scheme are not merged.
pub fn build_security(requirements: &[SecurityRequirement]) -> Vec<SecurityRequirementObject> {
    requirements
        .iter()
        .map(|req| {
            let mut map = SecurityRequirementObject::with_capacity(1);
            map.insert(req.auth_name.clone(), req.perm_types.clone());
            map
        })
        .collect()
}

fn build_request_body(body: &RequestBody) -> RequestBodyObject {
    RequestBodyObject {
        description: body.description.clone(),
        content: build_content(&body.content),
    }
}

/// Responses keyed by status code; a repeated code keeps the last entry.
pub fn build_responses(responses: &[ResponseEntry]) -> Responses {
    responses
        .iter()
        .map(|resp| {
            (
                resp.code,
                ResponseObject {
                    description: resp.description.clone(),
                    content: build_content(&resp.content),
                },
            )
        })
        .collect()
}

pub fn build_content(entries: &[ContentEntry]) -> Content {
    entries
        .iter()
        .map(|ct| {
            (
                ct.name.clone(),
                MediaTypeObject {
                    schema: SchemaRef {
                        ref_path: ct.schema.clone(),
                    },
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(method: &str, route: &str, operation_id: &str) -> PathEntry {
        PathEntry {
            operation_id: operation_id.to_string(),
            ..PathEntry::new(method, route)
        }
    }

    #[test]
    fn test_methods_are_lower_cased_and_merged_per_route() {
        let paths = build_paths(&[
            entry("GET", "/users", "listUsers"),
            entry("Post", "/users", "createUser"),
            entry("delete", "/users/{id}", "deleteUser"),
        ]);

        assert_eq!(paths.len(), 2);
        let users = &paths["/users"];
        assert_eq!(users.keys().collect::<Vec<_>>(), ["get", "post"]);
        assert_eq!(users["post"].operation_id, "createUser");
        assert!(paths["/users/{id}"].contains_key("delete"));
    }

    #[test]
    fn test_later_duplicate_replaces_earlier() {
        let paths = build_paths(&[
            entry("GET", "/users", "first"),
            entry("PUT", "/users", "update"),
            entry("get", "/users", "second"),
        ]);

        let users = &paths["/users"];
        assert_eq!(users.len(), 2);
        assert_eq!(users["get"].operation_id, "second");
        // Position of the first insertion is kept.
        assert_eq!(users.get_index(0).map(|(k, _)| k.as_str()), Some("get"));
    }

    #[test]
    fn test_security_keeps_order_and_duplicates() {
        let security = build_security(&[
            SecurityRequirement::new("petstore_auth", ["write:pets", "read:pets"]),
            SecurityRequirement::new("api_key", Vec::<String>::new()),
            SecurityRequirement::new("petstore_auth", ["read:pets"]),
        ]);

        assert_eq!(security.len(), 3);
        assert!(security.iter().all(|m| m.len() == 1));
        assert_eq!(security[0]["petstore_auth"], ["write:pets", "read:pets"]);
        assert!(security[1]["api_key"].is_empty());
        assert_eq!(security[2]["petstore_auth"], ["read:pets"]);
    }

    #[test]
    fn test_missing_request_body_is_empty_object() {
        let op = build_operation(&entry("GET", "/pets", "listPets"));
        assert_eq!(op.request_body, RequestBodyObject::default());
        assert!(op.responses.is_empty());
        assert!(op.security.is_empty());
    }

    #[test]
    fn test_content_references_schema() {
        let content = build_content(&[
            ContentEntry::new("application/json", "#/components/schemas/Pet"),
            ContentEntry::new("application/xml", "#/components/schemas/Pet"),
        ]);
        assert_eq!(content.len(), 2);
        assert_eq!(
            content["application/xml"].schema.ref_path,
            "#/components/schemas/Pet"
        );
    }
}
