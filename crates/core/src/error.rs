//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// The analytics core itself never fails on well-formed input — empty
/// collections, missing matches and empty histories are ordinary outcomes,
/// not errors. This type covers the identifier-parsing boundary; the
/// collaborator contracts carry their own error types (`SourceError`,
/// `SinkError` in the infra crate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
