//! # Repository Module
//!
//! Database repository implementations for the cash session ledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  HTTP Handler                                                           │
//! │       │                                                                 │
//! │       │  db.sessions().record_supply(amount, "Troco", None)            │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  SessionRepository                                                      │
//! │  ├── open(&self, operator_id, opening, notes, method)                  │
//! │  ├── close(&self, notes)                                               │
//! │  ├── record_supply(&self, amount, description, method)                 │
//! │  └── record_withdrawal(&self, amount, description, method)             │
//! │       │                                                                 │
//! │       │  SQL (session UPDATE + movement INSERT in one transaction)      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • Easy to test (in-memory database per test)                          │
//! │  • SQL is isolated in one place                                        │
//! │  • Session/movement atomicity lives in one layer                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SessionRepository`] - Cash session lifecycle and adjustments
//! - [`MovementRepository`] - Append-only ledger reads
//! - [`PaymentMethodRepository`] - Payment method catalog
//! - [`OperatorRepository`] - Operator lookups
//!
//! [`SessionRepository`]: session::SessionRepository
//! [`MovementRepository`]: movement::MovementRepository
//! [`PaymentMethodRepository`]: payment_method::PaymentMethodRepository
//! [`OperatorRepository`]: operator::OperatorRepository

pub mod movement;
pub mod operator;
pub mod payment_method;
pub mod session;
