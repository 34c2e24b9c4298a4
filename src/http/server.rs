//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router serving the site root
//! - Wire up middleware (tracing, timeout, prefix guard)
//! - Bind server to listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::guard::PathFilter;
use crate::http::middleware::RestrictPrefixLayer;
use crate::lifecycle::shutdown;

/// Static file server with the prefix guard in front.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, filter: Arc<dyn PathFilter>) -> Self {
        Self {
            router: Self::build_router(config, filter),
        }
    }

    /// The guard runs before the file service sees the request.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, filter: Arc<dyn PathFilter>) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&config.site.root))
            .layer(RestrictPrefixLayer::new(filter))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Router with all layers applied, for embedding or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
