//! restrict-prefix
//!
//! Static file server that hides every path segment starting with a
//! configured prefix.
//!
//! ```text
//! Client Request
//!     → TraceLayer → TimeoutLayer
//!     → RestrictPrefixLayer ── Rejected ──▶ 404 Not Found
//!         │ Allowed
//!         ▼
//!     ServeDir (site.root)
//! ```

use std::path::PathBuf;

use clap::Parser;

use restrict_prefix::config::{load_config, validate_config, ConfigError, ServerConfig};
use restrict_prefix::lifecycle::{signals, startup, Shutdown};
use restrict_prefix::observability::logging;

#[derive(Parser)]
#[command(name = "restrict-prefix")]
#[command(about = "Serve a directory while hiding segments with a restricted prefix", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override site.root.
    #[arg(short, long)]
    root: Option<String>,

    /// Override restrict_prefix.prefix.
    #[arg(short, long)]
    prefix: Option<String>,

    /// Override restrict_prefix.directive_file.
    #[arg(short, long)]
    directive_file: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(root) = self.root {
            config.site.root = root;
        }
        if let Some(prefix) = self.prefix {
            config.restrict_prefix.prefix = prefix;
            config.restrict_prefix.directive_file = None;
        }
        if let Some(file) = self.directive_file {
            config.restrict_prefix.directive_file = Some(file);
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init(&config.observability.log_level);
    tracing::info!("restrict-prefix v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    tokio::spawn(signals::forward_signals(shutdown.clone()));

    startup::run(config, shutdown).await
}
