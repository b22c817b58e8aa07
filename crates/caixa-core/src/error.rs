//! # Error Types
//!
//! Validation error types for caixa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  caixa-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  caixa-db errors (separate crate)                                      │
//! │  └── DbError          - Storage failures + ledger state conflicts      │
//! │                                                                         │
//! │  Server errors (in app)                                                │
//! │  └── ApiError         - What the frontend sees (status + JSON body)    │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├──► ApiError ──► Frontend                     │
//! │        DbError ─────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any ledger operation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive (supplies, withdrawals, sales).
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (opening amounts may be zero).
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "descricao".to_string(),
        };
        assert_eq!(err.to_string(), "descricao is required");

        let err = ValidationError::MustBePositive {
            field: "valor".to_string(),
        };
        assert_eq!(err.to_string(), "valor must be positive");

        let err = ValidationError::TooLong {
            field: "observacoes".to_string(),
            max: 500,
        };
        assert_eq!(
            err.to_string(),
            "observacoes must be at most 500 characters"
        );
    }
}
