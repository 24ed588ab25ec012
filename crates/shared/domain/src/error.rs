//! Domain-level errors.
//!
//! These errors represent failures of domain logic itself. They are
//! independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The password hashing primitive failed to produce or check a digest
    #[error("Password hash error: {0}")]
    Hash(String),

    /// A stored digest could not be parsed
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),
}

impl DomainError {
    /// Create a hash error
    pub fn hash(msg: impl Into<String>) -> Self {
        DomainError::Hash(msg.into())
    }

    /// Create a malformed digest error
    pub fn malformed_digest(msg: impl Into<String>) -> Self {
        DomainError::MalformedDigest(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
