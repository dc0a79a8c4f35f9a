use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServeConfig;
use crate::error::ServeError;
use crate::files::{StaticDir, serve_static};

/// A configured, not yet listening, docs server.
#[derive(Debug)]
pub struct SwaggerUiServer {
    addr: String,
    dir: Arc<StaticDir>,
}

impl SwaggerUiServer {
    /// Validate the configuration. Fails when no configuration or no port
    /// is given.
    pub fn new(config: Option<ServeConfig>) -> Result<Self, ServeError> {
        let config = config.ok_or_else(|| {
            ServeError::Configuration("no server configuration provided".to_string())
        })?;
        let addr = config.listen_addr()?;

        Ok(Self {
            addr,
            dir: Arc::new(StaticDir {
                root: config.directory.clone(),
                prefix: config.route_prefix(),
            }),
        })
    }

    /// The router serving the directory under the route prefix.
    pub fn router(&self) -> Router {
        Router::new()
            .fallback(serve_static)
            .with_state(Arc::clone(&self.dir))
    }

    /// Bind the listener.
    pub async fn bind(self) -> Result<BoundServer, ServeError> {
        let listener = TcpListener::bind(&self.addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: self.addr.clone(),
                source,
            })?;
        let router = self.router();

        Ok(BoundServer {
            listener,
            router,
            dir: self.dir,
        })
    }
}

/// A server with a bound listener, ready to accept connections.
#[derive(Debug)]
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
    dir: Arc<StaticDir>,
}

impl BoundServer {
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until the listener fails.
    pub async fn serve(self) -> Result<(), ServeError> {
        self.log_startup();
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Serve until `signal` resolves, then finish in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.log_startup();
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;
        log::info!("Swagger UI server stopped");
        Ok(())
    }

    fn log_startup(&self) {
        match self.listener.local_addr() {
            Ok(addr) => log::info!(
                "Serving Swagger UI on HTTP port: {} (route {}/, directory {})",
                addr.port(),
                self.dir.prefix,
                self.dir.root.display()
            ),
            Err(e) => log::warn!("Serving Swagger UI (local address unavailable: {e})"),
        }
    }
}
