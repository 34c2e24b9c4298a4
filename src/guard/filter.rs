//! Filter capability invoked by the request pipeline.

/// Outcome of evaluating a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No segment matched; the request continues to the next stage.
    Allowed,
    /// The request must stop with a not-found response.
    /// Carries the first segment that matched.
    Rejected(String),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_allowed()
    }

    /// The segment that caused the rejection, if any.
    pub fn matched_segment(&self) -> Option<&str> {
        match self {
            Decision::Allowed => None,
            Decision::Rejected(segment) => Some(segment),
        }
    }
}

/// Trait for deciding whether a request path may be served.
pub trait PathFilter: Send + Sync + std::fmt::Debug {
    /// Evaluate a raw request path.
    fn evaluate(&self, path: &str) -> Decision;
}
