use thiserror::Error;

/// Errors raised by a single planning stage.
///
/// Every stage returns one of these instead of a partial result. They are
/// plain arithmetic failures and are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// A panel area, weather value or catalog entry outside sensible bounds.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A stage was invoked before the value it depends on was resolved.
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    /// ROI requested for an installation that generates nothing.
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}

impl PlannerError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
