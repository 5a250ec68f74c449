//! Domain error types

use thiserror::Error;

/// Validation errors for property values.
///
/// These are only produced by the opt-in verification path; resolution
/// itself absorbs malformed syntax and never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value contains a `${` with no closing `}`.
    #[error("unterminated placeholder in value of `{0}`")]
    UnterminatedPlaceholder(String),

    /// A value contains an empty `${}` reference.
    #[error("empty placeholder in value of `{0}`")]
    EmptyPlaceholder(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
