use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed marshaling to yaml: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),

    #[error("failed creating yaml output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing issue occurred on {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("marshaling issue occurred: {0}")]
    Marshal(#[source] PersistError),

    #[error("an issue occurred while saving to YAML output: {0}")]
    Save(#[source] PersistError),
}

impl From<PersistError> for BuildError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::Serialize(_) => BuildError::Marshal(err),
            PersistError::Create { .. } | PersistError::Write { .. } => BuildError::Save(err),
        }
    }
}

impl BuildError {
    /// The underlying persistence failure.
    pub fn persist_error(&self) -> &PersistError {
        match self {
            BuildError::Marshal(err) | BuildError::Save(err) => err,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
