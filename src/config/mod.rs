//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → ServerConfig::build_guard (directive file or inline prefix)
//!     → Arc<dyn PathFilter> shared by all request tasks
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A directive file, when set, takes precedence over the inline prefix

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, RestrictPrefixConfig, ServerConfig, SiteConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
