//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address is not a socket address: {0}")]
    InvalidBindAddress(String),

    #[error("site.root must not be empty")]
    EmptyRoot,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("restrict_prefix.directive_file must not be empty")]
    EmptyDirectiveFile,
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.site.root.is_empty() {
        errors.push(ValidationError::EmptyRoot);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.restrict_prefix.directive_file.as_deref() == Some("") {
        errors.push(ValidationError::EmptyDirectiveFile);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
