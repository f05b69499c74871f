//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only (validation, invariants, funds).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A debit asked for more than the available balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// A value failed validation (e.g. malformed or non-positive amount).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// True for the overdraft rejection raised by debits.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_has_fixed_message() {
        assert_eq!(DomainError::InsufficientFunds.to_string(), "Insufficient funds");
        assert!(DomainError::InsufficientFunds.is_insufficient_funds());
    }

    #[test]
    fn constructors_carry_message() {
        let err = DomainError::validation("amount must be positive");
        assert_eq!(err.to_string(), "validation failed: amount must be positive");
        assert!(!err.is_insufficient_funds());

        assert_eq!(
            DomainError::invariant("balance overflow").to_string(),
            "invariant violated: balance overflow"
        );
        assert_eq!(DomainError::not_found(), DomainError::NotFound);
    }
}
