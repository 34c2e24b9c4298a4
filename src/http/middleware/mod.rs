//! Request filtering middleware.

pub mod restrict_prefix;

pub use restrict_prefix::{restrict_prefix_middleware, RestrictPrefixLayer, RestrictPrefixService};
