pub mod config;
pub mod description;
pub mod document;
pub mod error;
pub mod persist;
pub mod transform;

use description::spec::ApiDescription;
use error::BuildError;
use persist::BuildConfig;
use transform::TransformOptions;

/// Transform `description`, encode it as YAML and write it to the path
/// selected by `config`.
pub fn build_docs(description: &ApiDescription, config: &BuildConfig) -> Result<(), BuildError> {
    build_docs_with_options(description, config, &TransformOptions::default())
}

/// [`build_docs`] with explicit transform options.
pub fn build_docs_with_options(
    description: &ApiDescription,
    config: &BuildConfig,
    options: &TransformOptions,
) -> Result<(), BuildError> {
    let document = transform::transform_with_options(description, options);
    let yaml = persist::to_yaml(&document)?;

    let path = config.output_path();
    persist::write_output_file(&path, yaml.as_bytes(), config.create_dirs)?;

    log::info!("OpenAPI document written to {}", path.display());
    Ok(())
}
