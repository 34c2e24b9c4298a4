//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → middleware/restrict_prefix.rs (evaluate path)
//!         Rejected → response.rs (404 Not Found), stop
//!         Allowed  → next stage (static files), request unchanged
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use middleware::{restrict_prefix_middleware, RestrictPrefixLayer, RestrictPrefixService};
pub use server::HttpServer;
