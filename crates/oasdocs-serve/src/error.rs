use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("swagger config is required: {0}")]
    Configuration(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("an error occurred while serving Swagger UI: {0}")]
    Server(#[from] io::Error),
}
