//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! guard / middleware / server
//!     → tracing events (debug on rejection, info on lifecycle)
//!     → logging.rs subscriber (fmt layer, EnvFilter)
//! ```

pub mod logging;
