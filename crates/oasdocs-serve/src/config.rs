use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ServeError;

/// Default route prefix the docs are served under.
pub const DEFAULT_ROUTE: &str = "/api";

/// Directory `oasdocs build` writes to by default.
pub const DEFAULT_DIRECTORY: &str = "./internal/dist";

/// Listener and content settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Route prefix; an empty route selects [`DEFAULT_ROUTE`].
    pub route: String,
    /// Required. `0` asks the OS for a free port.
    pub port: Option<u16>,
    pub host: String,
    pub directory: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            route: DEFAULT_ROUTE.to_string(),
            port: None,
            host: "0.0.0.0".to_string(),
            directory: PathBuf::from(DEFAULT_DIRECTORY),
        }
    }
}

impl ServeConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port: Some(port),
            ..Self::default()
        }
    }

    /// The route prefix with a leading slash and no trailing slashes. The
    /// root route becomes the empty prefix.
    pub fn route_prefix(&self) -> String {
        let route = if self.route.is_empty() {
            DEFAULT_ROUTE
        } else {
            self.route.as_str()
        };
        let route = route.trim_end_matches('/');
        if route.is_empty() || route.starts_with('/') {
            route.to_string()
        } else {
            format!("/{route}")
        }
    }

    pub(crate) fn listen_addr(&self) -> Result<String, ServeError> {
        let port = self
            .port
            .ok_or_else(|| ServeError::Configuration("port is required".to_string()))?;
        Ok(format!("{}:{}", self.host, port))
    }
}
