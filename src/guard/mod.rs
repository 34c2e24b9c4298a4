//! Path guarding subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (directive text, TOML, or direct assignment)
//!     → prefix.rs (PrefixGuard intake)
//!     → PrefixGuard::validate (default prefix applied)
//!     → Arc<dyn PathFilter> (immutable, shared by all request tasks)
//!
//! Per request:
//!     request path
//!     → filter.rs (PathFilter::evaluate)
//!     → Decision::Allowed | Decision::Rejected(segment)
//! ```
//!
//! # Design Decisions
//! - Evaluation is a pure function of (prefix, path)
//! - No decoding or normalization: the path is tested exactly as received
//! - First matching segment wins

pub mod filter;
pub mod prefix;

pub use filter::{Decision, PathFilter};
pub use prefix::{PrefixGuard, PrefixGuardConfig, DEFAULT_PREFIX};
