//! Domain-level errors.
//!
//! These errors are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier text that cannot name any user
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid identifier error
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        DomainError::InvalidId(raw.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
