//! Textual configuration subsystem.
//!
//! # Data Flow
//! ```text
//! directive source (one directive per line)
//!     → lexer.rs (tokens with line numbers)
//!     → dispenser.rs (cursor: next / next_arg / args)
//!     → handler unmarshaller (e.g. PrefixGuard::unmarshal)
//! ```
//!
//! # Design Decisions
//! - Consumed once at load time; nothing is kept after intake
//! - Errors carry the line number of the offending directive

pub mod dispenser;
pub mod lexer;

pub use dispenser::Dispenser;
pub use lexer::Token;

use thiserror::Error;

/// Errors raised while reading directives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("wrong argument count or unexpected line ending after '{directive}' (line {line})")]
    ArgumentCount { directive: String, line: usize },

    #[error("unrecognized directive '{name}' (line {line})")]
    UnknownDirective { name: String, line: usize },

    #[error("unterminated quoted token (line {line})")]
    UnterminatedQuote { line: usize },
}

/// Parse a directive source into a validated [`PrefixGuard`](crate::guard::PrefixGuard).
pub fn parse_directive(src: &str) -> Result<crate::guard::PrefixGuard, DirectiveError> {
    let mut d = Dispenser::new(src)?;
    let mut guard = crate::guard::PrefixGuard::default();
    guard.unmarshal(&mut d)?;
    guard.validate();
    Ok(guard)
}
