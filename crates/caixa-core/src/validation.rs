//! # Validation Module
//!
//! Input validation for ledger operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Request deserialization (serde)                              │
//! │  ├── Wrong types, missing required JSON fields                         │
//! │  └── Rejected by the extractor before a handler runs                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Amounts must be positive (supplies/withdrawals)                   │
//! │  └── Descriptions must be present and bounded                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK (amount_cents >= 0)                                         │
//! │  ├── Partial unique index: one open session                            │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names in errors are the wire names ("valor", "descricao") so the
//! boundary can surface them to the frontend without translation tables.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_DESCRIPTION_LEN, MAX_NOTES_LEN};

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a supply/withdrawal/sale amount.
///
/// ## Rules
/// - Must be strictly positive. A zero supply is a no-op and a negative
///   one would invert the movement's meaning.
///
/// ## Example
/// ```rust
/// use caixa_core::money::Money;
/// use caixa_core::validation::validate_movement_amount;
///
/// assert!(validate_movement_amount(Money::from_cents(5_000)).is_ok());
/// assert!(validate_movement_amount(Money::zero()).is_err());
/// assert!(validate_movement_amount(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_movement_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "valor".to_string(),
        });
    }

    Ok(())
}

/// Validates a session opening amount.
///
/// ## Rules
/// - May be zero (a register can open without a float) but never negative.
pub fn validate_opening_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: "valorAbertura".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a movement description.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum length [`MAX_DESCRIPTION_LEN`]
///
/// ## Returns
/// The trimmed description.
pub fn validate_description(description: &str) -> ValidationResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "descricao".to_string(),
        });
    }

    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "descricao".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(description.to_string())
}

/// Validates session notes (opening or closing).
///
/// ## Rules
/// - May be empty (notes are optional everywhere)
/// - Maximum length [`MAX_NOTES_LEN`]
///
/// ## Returns
/// The trimmed notes string.
pub fn validate_notes(notes: &str) -> ValidationResult<String> {
    let notes = notes.trim();

    if notes.len() > MAX_NOTES_LEN {
        return Err(ValidationError::TooLong {
            field: "observacoes".to_string(),
            max: MAX_NOTES_LEN,
        });
    }

    Ok(notes.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
