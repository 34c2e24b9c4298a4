//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::directive::parse_directive;
use crate::guard::{PrefixGuard, PrefixGuardConfig};

/// Root configuration for the guarded file server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Static site served behind the guard.
    pub site: SiteConfig,

    /// Prefix guard settings.
    pub restrict_prefix: RestrictPrefixConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServerConfig {
    /// Build the validated guard described by this configuration.
    ///
    /// A `directive_file` overrides the inline `prefix`.
    pub fn build_guard(&self) -> Result<PrefixGuard, ConfigError> {
        match &self.restrict_prefix.directive_file {
            Some(path) => {
                let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_directive(&src).map_err(|source| ConfigError::Directive {
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(PrefixGuard::from_config(PrefixGuardConfig {
                prefix: self.restrict_prefix.prefix.clone(),
            })),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Static site configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory served as the document root.
    pub root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "./public".to_string(),
        }
    }
}

/// Prefix guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RestrictPrefixConfig {
    /// Forbidden segment prefix. Empty means the default ".".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,

    /// Optional file holding a `restrict_prefix <prefix>` directive.
    pub directive_file: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
