//! Hidden-segment request filter.
//!
//! Rejects, with a 404, any request whose path contains a `/`-delimited
//! segment starting with a configured prefix (`.` by default).

pub mod config;
pub mod directive;
pub mod guard;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;

pub use guard::{Decision, PathFilter, PrefixGuard, PrefixGuardConfig};
pub use http::{restrict_prefix_middleware, RestrictPrefixLayer};
pub use registry::HandlerRegistry;
