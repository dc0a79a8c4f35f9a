pub mod components;
pub mod paths;
pub mod presence;

use crate::config::ComponentsMode;
use crate::description::spec::ApiDescription;
use crate::document::OpenApiDocument;

use components::build_components;
use paths::build_paths;

/// Options controlling how the transform treats repeated definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub components: ComponentsMode,
}

/// Transform an API description into its canonical OpenAPI document.
pub fn transform(description: &ApiDescription) -> OpenApiDocument {
    transform_with_options(description, &TransformOptions::default())
}

/// Transform with explicit options.
///
/// The transform is total: an incomplete description yields an incomplete
/// document, never an error. The returned document shares nothing with
/// `description`.
pub fn transform_with_options(
    description: &ApiDescription,
    options: &TransformOptions,
) -> OpenApiDocument {
    let paths = build_paths(&description.paths);
    let components = build_components(&description.components, options.components);

    log::debug!(
        "transformed {} path entries into {} routes, {} component groups ({:?})",
        description.paths.len(),
        paths.len(),
        description.components.len(),
        options.components,
    );

    OpenApiDocument {
        openapi: description.openapi.clone(),
        info: description.info.clone(),
        external_docs: description.external_docs.clone(),
        servers: description.servers.clone(),
        tags: description.tags.clone(),
        paths,
        components,
    }
}
