//! # Error Types
//!
//! Authoring-time validation errors for the menu domain.
//!
//! The runtime path has no error taxonomy: every input is static,
//! author-controlled data, and the `Pricing` sum type makes the "item with
//! no price information" defect unrepresentable. What remains is the class
//! of authoring mistakes (empty names, negative prices, empty variant
//! lists) that [`crate::validation`] catches in unit tests and data review.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, offending values)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Menu data authoring errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A list that must have at least one entry is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// A price is negative.
    #[error("{field} must not be negative (got {yen}円)")]
    NegativePrice { field: String, yen: i64 },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NegativePrice {
            field: "priceExcl".to_string(),
            yen: -100,
        };
        assert_eq!(err.to_string(), "priceExcl must not be negative (got -100円)");
    }
}
