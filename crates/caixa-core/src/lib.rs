//! # caixa-core: Pure Business Logic for the Caixa PDV backend
//!
//! This crate is the **heart** of the cash session ledger. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Caixa PDV Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (PDV terminal)                      │   │
//! │  │    Abrir Caixa ──► Suprimento/Sangria ──► Fechar ──► Relatório │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/server (axum)                           │   │
//! │  │    /api/caixa/abrir, /fechar, /suprimento, /sangria, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ caixa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│  │   │
//! │  │   │  Session  │  │   Money   │  │ grouping  │  │   rules   │  │   │
//! │  │   │  Movement │  │ centavos  │  │ by method │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    caixa-db (Database Layer)                    │   │
//! │  │        SQLite sessions + movements, migrations, seed            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CashSession, CashMovement, PaymentMethod, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`report`] - Per-payment-method report aggregation
//! - [`error`] - Validation error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) so the
//!    closing-amount identity holds exactly
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use caixa_core::money::Money;
//!
//! // Create money from centavos (never from floats internally!)
//! let opening = Money::from_cents(10_000); // R$ 100,00
//! let supply = Money::from_cents(5_000);   // R$ 50,00
//! let withdrawal = Money::from_cents(2_000);
//!
//! // Reconciliation math stays exact
//! let closing = opening + supply - withdrawal;
//! assert_eq!(closing.cents(), 13_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use caixa_core::Money` instead of
// `use caixa_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use report::SessionReport;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a movement description.
///
/// ## Business Reason
/// Descriptions appear on reconciliation reports and receipts; anything
/// longer than this is print noise, not information.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum length of session opening/closing notes.
pub const MAX_NOTES_LEN: usize = 500;
