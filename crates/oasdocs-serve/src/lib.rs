//! Serves a generated docs directory (the OpenAPI YAML plus a Swagger UI
//! bundle) over HTTP.
//!
//! The server is an explicit value owned by the caller: build it with
//! [`SwaggerUiServer::new`], [`SwaggerUiServer::bind`] it, then run it with
//! [`BoundServer::serve`] or [`BoundServer::serve_with_shutdown`].

pub mod config;
pub mod error;
pub mod files;
pub mod server;

pub use config::ServeConfig;
pub use error::ServeError;
pub use server::{BoundServer, SwaggerUiServer};
