//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rule violations on user-supplied values.
/// These are independent of terminal or configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid literal for a whole number: '{input}'")]
    InvalidNumber { input: String },

    #[error("score out of range: {base} + {bonus}")]
    ScoreOverflow { base: i64, bonus: i64 },

    #[error("duplicate event type selector: {0}")]
    DuplicateSelector(i64),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
