//! Unified error types for the domain layer
//!
//! Constructors on domain records return `DomainError` so callers can report
//! exactly which invariant a generated record broke.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A value fell outside its allowed range
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Wrong number of items in a fixed-size collection
    #[error("expected exactly {expected} {what}, got {actual}")]
    WrongCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl DomainError {
    /// Creates a validation error for a broken record invariant.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Wizard name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
