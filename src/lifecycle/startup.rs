//! Startup orchestration.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::guard::PathFilter;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

/// Build the guard, bind the listener and serve until shutdown.
pub async fn run(
    config: ServerConfig,
    shutdown: Shutdown,
) -> Result<(), Box<dyn std::error::Error>> {
    let guard = config.build_guard()?;
    tracing::info!(prefix = %guard.prefix(), root = %config.site.root, "Prefix guard ready");
    let filter: Arc<dyn PathFilter> = Arc::new(guard);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(&config, filter);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
