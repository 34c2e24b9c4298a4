//! Shared utilities for integration testing.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use restrict_prefix::config::ServerConfig;
use restrict_prefix::guard::PathFilter;
use restrict_prefix::http::HttpServer;
use restrict_prefix::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Create a site directory containing visible and hidden files.
pub fn create_site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "restrict-prefix-site-{}-{}",
        std::process::id(),
        name
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join(".dir")).unwrap();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("sage.svg"), "<svg/>").unwrap();
    fs::write(root.join(".secret"), "top secret").unwrap();
    fs::write(root.join(".dir/secret"), "nested secret").unwrap();
    fs::write(root.join("secret.txt"), "prefixed").unwrap();
    fs::write(root.join("not-secret.txt"), "public").unwrap();
    fs::write(root.join("a/secretfile"), "nested prefixed").unwrap();
    fs::write(root.join("a/xsecretfile"), "nested public").unwrap();
    root
}

/// Config serving `root` on an ephemeral port.
pub fn site_config(root: &PathBuf) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.site.root = root.display().to_string();
    config
}

/// Start the server in the background and return its address.
#[allow(dead_code)]
pub async fn start_server(
    config: &ServerConfig,
    filter: Arc<dyn PathFilter>,
    shutdown: &Shutdown,
) -> SocketAddr {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config, filter);
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    addr
}
