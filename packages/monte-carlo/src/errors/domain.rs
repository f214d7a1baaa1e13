//! Domain-level error type used across the engine and its consumers.
//!
//! Gameplay refusals (an invalid pair, no hint available) are not errors and
//! never surface here; this type covers construction, parsing and
//! configuration failures only.

use thiserror::Error;

/// Validation error kinds to distinguish which rule was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidDimensions,
    ParseCard,
    ParseRank,
    ParseSuit,
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Environment or configuration problem
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Config(_) => None,
        }
    }
}
