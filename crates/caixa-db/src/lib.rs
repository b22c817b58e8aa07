//! # caixa-db: Database Layer for the Caixa PDV backend
//!
//! This crate provides database access for the cash session ledger.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caixa PDV Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (abrir_caixa)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     caixa-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (session.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ SessionRepo   │    │ 001_init.sql │  │   │
//! │  │   │ Connection    │◄───│ MovementRepo  │    │ 002_idx.sql  │  │   │
//! │  │   │ Management    │    │ ...           │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (./data/caixa.db, or :memory: in tests)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (session, movement, etc.)
//! - [`seed`] - Default admin operator and payment methods
//!
//! ## Usage
//!
//! ```rust,ignore
//! use caixa_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let config = DbConfig::new("path/to/caixa.db");
//! let db = Database::new(config).await?;
//!
//! // Seed the admin account and payment methods
//! caixa_db::seed::seed_defaults(&db).await?;
//!
//! // Use repositories
//! let session = db.sessions().open(1, Money::from_cents(10_000), "", None).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::movement::MovementRepository;
pub use repository::operator::OperatorRepository;
pub use repository::payment_method::PaymentMethodRepository;
pub use repository::session::SessionRepository;
