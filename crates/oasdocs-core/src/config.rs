use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::persist::{BuildConfig, DEFAULT_OUTPUT_PATH};

/// Top-level project configuration loaded from `.oasdocs.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OasDocsConfig {
    pub input: String,
    pub output: String,
    pub create_dirs: bool,
    pub components: ComponentsMode,
    pub serve: ServeSettings,
}

impl Default for OasDocsConfig {
    fn default() -> Self {
        Self {
            input: "api.yaml".to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
            create_dirs: false,
            components: ComponentsMode::default(),
            serve: ServeSettings::default(),
        }
    }
}

impl OasDocsConfig {
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            output: Some(PathBuf::from(&self.output)),
            create_dirs: self.create_dirs,
        }
    }
}

/// How repeated component groups combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentsMode {
    /// Each group replaces the previous one; only the last group is emitted.
    #[default]
    LastGroup,
    /// Schemas and security schemes of all groups are merged by name.
    Merge,
}

/// Settings for `oasdocs serve`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeSettings {
    pub route: String,
    pub port: Option<u16>,
    pub directory: String,
}

impl Default for ServeSettings {
    fn default() -> Self {
        Self {
            route: "/api".to_string(),
            port: None,
            directory: "./internal/dist".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oasdocs.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OasDocsConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: OasDocsConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# oasdocs configuration
input: api.yaml                       # API description (YAML or JSON)
output: ./internal/dist/openapi.yaml
create_dirs: false                    # create missing output directories
components: last_group                # last_group | merge

serve:
  route: /api
  # port: 8080
  directory: ./internal/dist
"#
}
