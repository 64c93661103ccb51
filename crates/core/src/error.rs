//! Errors raised around, never inside, the daily update.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied data is unusable as stock (blank name, quality out of
    /// bounds, undecodable inventory).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Stock drifted outside its bounds after aging.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The human-readable detail, without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::InvariantViolation(msg) => msg,
        }
    }
}
