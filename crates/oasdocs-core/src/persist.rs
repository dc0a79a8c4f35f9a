//! YAML serialization of the canonical document and writing it to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document::OpenApiDocument;
use crate::error::PersistError;

/// Where the document lands when no override is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./internal/dist/openapi.yaml";

/// Output options for [`crate::build_docs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Destination override. `None` or an empty path selects
    /// [`DEFAULT_OUTPUT_PATH`].
    pub output: Option<PathBuf>,
    /// Create missing parent directories before opening the destination.
    pub create_dirs: bool,
}

impl BuildConfig {
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Some(path.into()),
            ..Self::default()
        }
    }

    /// Pick the config to use out of several; only the first is honored.
    pub fn first(configs: &[BuildConfig]) -> BuildConfig {
        configs.first().cloned().unwrap_or_default()
    }

    /// The resolved destination path.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Encode the document as YAML. Key order follows the document's maps and
/// status codes are written as plain integer keys.
pub fn to_yaml(document: &OpenApiDocument) -> Result<String, PersistError> {
    Ok(serde_yaml_ng::to_string(document)?)
}

/// Serialize `document` and write it to `path`, truncating any existing file.
pub fn persist(document: &OpenApiDocument, path: &Path) -> Result<(), PersistError> {
    let yaml = to_yaml(document)?;
    write_output_file(path, yaml.as_bytes(), false)
}

/// Write already encoded bytes to `path`.
///
/// The file handle is dropped on every return path.
pub fn write_output_file(path: &Path, bytes: &[u8], create_dirs: bool) -> Result<(), PersistError> {
    if create_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistError::Create {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let file = File::create(path).map_err(|source| PersistError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    write_and_flush(bytes, file).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Write `bytes` through a buffered writer and flush it.
pub fn write_and_flush<W: Write>(bytes: &[u8], out: W) -> std::io::Result<()> {
    let mut writer = BufWriter::new(out);
    writer.write_all(bytes)?;
    writer.flush()
}
