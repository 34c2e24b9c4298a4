//! Prefix guard: rejects any path with a segment starting with a configured prefix.
//!
//! # Responsibilities
//! - Hold the forbidden prefix (default `.`, i.e. hidden files and directories)
//! - Split the path on `/` and test every segment, empty ones included
//! - Parse the `restrict_prefix <prefix>` directive
//!
//! # Design Decisions
//! - Literal prefix comparison; no case folding, percent-decoding or normalization
//! - Configuration is write-once; the validated guard is shared via Arc

use serde::{Deserialize, Serialize};

use crate::directive::{Dispenser, DirectiveError};
use crate::guard::filter::{Decision, PathFilter};

/// Prefix applied when none has been configured.
pub const DEFAULT_PREFIX: &str = ".";

/// Directive name in textual configuration.
pub const DIRECTIVE: &str = "restrict_prefix";

/// Programmatic configuration for a [`PrefixGuard`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrefixGuardConfig {
    /// Prefix forbidden at the start of any path segment.
    /// Empty means "use the default".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
}

/// Rejects requests where any path segment begins with `prefix`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixGuard {
    prefix: String,
}

impl PrefixGuard {
    /// Create a guard with the prefix stored verbatim.
    /// Call [`validate`](Self::validate) before serving.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Build a ready-to-serve guard from programmatic configuration.
    pub fn from_config(config: PrefixGuardConfig) -> Self {
        let mut guard = Self::new(config.prefix);
        guard.validate();
        guard
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Store `raw` verbatim as the prefix.
    pub fn set_prefix(&mut self, raw: impl Into<String>) {
        self.prefix = raw.into();
    }

    /// Apply the default prefix if none is set. Idempotent.
    pub fn validate(&mut self) {
        if self.prefix.is_empty() {
            self.prefix = DEFAULT_PREFIX.to_string();
        }
    }

    /// Read every `restrict_prefix` occurrence from the dispenser.
    ///
    /// Syntax:
    ///
    /// ```text
    /// restrict_prefix <prefix>
    /// ```
    ///
    /// Each occurrence takes exactly one argument; a later occurrence
    /// overwrites an earlier one.
    pub fn unmarshal(&mut self, d: &mut Dispenser) -> Result<(), DirectiveError> {
        while d.next() {
            if d.val() != DIRECTIVE {
                return Err(DirectiveError::UnknownDirective {
                    name: d.val().to_string(),
                    line: d.line(),
                });
            }
            let mut prefix = String::new();
            if !d.args(&mut [&mut prefix]) {
                return Err(d.arg_err());
            }
            if d.next_arg() {
                return Err(d.arg_err());
            }
            self.set_prefix(prefix);
        }
        Ok(())
    }
}

impl PathFilter for PrefixGuard {
    fn evaluate(&self, path: &str) -> Decision {
        path.split('/')
            .find(|segment| segment.starts_with(self.prefix.as_str()))
            .map(|segment| Decision::Rejected(segment.to_string()))
            .unwrap_or(Decision::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(prefix: &str) -> PrefixGuard {
        let mut guard = PrefixGuard::new(prefix);
        guard.validate();
        guard
    }

    #[test]
    fn test_default_prefix() {
        let guard = validated("");
        assert_eq!(guard.prefix(), ".");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut guard = PrefixGuard::default();
        guard.validate();
        let first = guard.prefix().to_string();
        guard.validate();
        assert_eq!(guard.prefix(), first);

        let mut custom = PrefixGuard::new("_");
        custom.validate();
        custom.validate();
        assert_eq!(custom.prefix(), "_");
    }

    #[test]
    fn test_hidden_paths() {
        let guard = validated("");

        assert_eq!(guard.evaluate("/sage.svg"), Decision::Allowed);
        assert_eq!(guard.evaluate("/.secret"), Decision::Rejected(".secret".into()));
        // Scan covers every segment, not just the last.
        assert_eq!(guard.evaluate("/.dir/secret"), Decision::Rejected(".dir".into()));
        assert_eq!(guard.evaluate("/a/b/.git/config"), Decision::Rejected(".git".into()));
    }

    #[test]
    fn test_first_match_wins() {
        let guard = validated(".");
        assert_eq!(
            guard.evaluate("/.first/ok/.second"),
            Decision::Rejected(".first".into())
        );
    }

    #[test]
    fn test_total_over_odd_inputs() {
        let guard = validated(".");
        assert!(guard.evaluate("").is_allowed());
        assert!(guard.evaluate("/").is_allowed());
        assert!(guard.evaluate("//a//").is_allowed());
        assert!(guard.evaluate("no-slash").is_allowed());
        assert!(guard.evaluate(".no-slash").is_rejected());
        // Dots inside a segment don't count.
        assert!(guard.evaluate("/a.b/c.").is_allowed());
    }

    #[test]
    fn test_literal_prefix_semantics() {
        let guard = validated("secret");
        assert!(guard.evaluate("/secret.txt").is_rejected());
        assert!(guard.evaluate("/not-secret.txt").is_allowed());
        assert!(guard.evaluate("/a/secretfile").is_rejected());
        assert!(guard.evaluate("/a/xsecretfile").is_allowed());
        // Case-sensitive, no decoding.
        assert!(guard.evaluate("/Secret").is_allowed());
        assert!(guard.evaluate("/%73ecret").is_allowed());
    }

    #[test]
    fn test_multi_char_prefix_is_literal() {
        let guard = validated("se");
        assert!(guard.evaluate("/secret").is_rejected());
        assert!(guard.evaluate("/search").is_rejected());
    }

    #[test]
    fn test_empty_prefix_rejects_everything() {
        let guard = PrefixGuard::default();
        assert_eq!(guard.evaluate("/"), Decision::Rejected(String::new()));
        assert!(guard.evaluate("/sage.svg").is_rejected());
        assert!(guard.evaluate("").is_rejected());
    }

    #[test]
    fn test_from_config() {
        let guard = PrefixGuard::from_config(PrefixGuardConfig::default());
        assert_eq!(guard.prefix(), ".");

        let guard = PrefixGuard::from_config(PrefixGuardConfig {
            prefix: "_".into(),
        });
        assert_eq!(guard.prefix(), "_");
    }

    #[test]
    fn test_config_json() {
        let config: PrefixGuardConfig = serde_json::from_str("{}").unwrap();
        assert!(config.prefix.is_empty());
        assert_eq!(serde_json::to_string(&config).unwrap(), "{}");

        let config: PrefixGuardConfig = serde_json::from_str(r#"{"prefix":"~"}"#).unwrap();
        assert_eq!(config.prefix, "~");
    }

    #[test]
    fn test_unmarshal_single_argument() {
        let mut d = Dispenser::new("restrict_prefix secret").unwrap();
        let mut guard = PrefixGuard::default();
        guard.unmarshal(&mut d).unwrap();
        assert_eq!(guard.prefix(), "secret");
    }

    #[test]
    fn test_unmarshal_argument_count() {
        let mut d = Dispenser::new("restrict_prefix . extra").unwrap();
        let err = PrefixGuard::default().unmarshal(&mut d).unwrap_err();
        assert!(matches!(err, DirectiveError::ArgumentCount { line: 1, .. }));

        let mut d = Dispenser::new("restrict_prefix\n_").unwrap();
        let err = PrefixGuard::default().unmarshal(&mut d).unwrap_err();
        assert!(matches!(err, DirectiveError::ArgumentCount { line: 1, .. }));
    }

    #[test]
    fn test_unmarshal_rejects_other_directives() {
        let mut d = Dispenser::new("restrict_prefx _\n").unwrap();
        let err = PrefixGuard::default().unmarshal(&mut d).unwrap_err();
        assert_eq!(
            err,
            DirectiveError::UnknownDirective {
                name: "restrict_prefx".into(),
                line: 1
            }
        );

        let mut d = Dispenser::new("restrict_prefix _\nroot /srv/www\n").unwrap();
        let mut guard = PrefixGuard::default();
        let err = guard.unmarshal(&mut d).unwrap_err();
        assert!(matches!(err, DirectiveError::UnknownDirective { line: 2, .. }));
    }

    #[test]
    fn test_unmarshal_last_occurrence_wins() {
        let mut d = Dispenser::new("restrict_prefix a\nrestrict_prefix b\n").unwrap();
        let mut guard = PrefixGuard::default();
        guard.unmarshal(&mut d).unwrap();
        assert_eq!(guard.prefix(), "b");
    }

    #[test]
    fn test_unmarshal_empty_argument_defaults() {
        let mut d = Dispenser::new(r#"restrict_prefix """#).unwrap();
        let mut guard = PrefixGuard::default();
        guard.unmarshal(&mut d).unwrap();
        assert_eq!(guard.prefix(), "");
        guard.validate();
        assert_eq!(guard.prefix(), ".");
    }
}
