//! # Seed Data
//!
//! First-run defaults: the admin operator and the payment method registry.
//!
//! ## What Gets Seeded
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  operators                                                              │
//! │    admin / admin  "Administrador"  is_admin = 1                         │
//! │                                                                         │
//! │  payment_methods            code   installments                         │
//! │    Dinheiro                  01    no                                   │
//! │    Cartão de Débito          04    no                                   │
//! │    Cartão de Crédito         03    yes, up to 12                        │
//! │    PIX                       17    no                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The codes are the fiscal payment-type codes the registry has always
//! carried. Seeding is idempotent: each table is only populated when it is
//! empty, so restarting the server never duplicates rows or overwrites
//! anything an operator renamed by hand in the database.

use tracing::{debug, info};

use crate::error::DbResult;
use crate::pool::Database;

/// Default payment methods: (label, fiscal code, allows installments, max).
const DEFAULT_PAYMENT_METHODS: [(&str, &str, bool, i64); 4] = [
    ("Dinheiro", "01", false, 1),
    ("Cartão de Débito", "04", false, 1),
    ("Cartão de Crédito", "03", true, 12),
    ("PIX", "17", false, 1),
];

/// Seeds the admin operator and payment methods when missing.
///
/// ## When To Call
/// Once at server startup, after migrations. Safe to call again — both
/// steps skip when their table already has rows.
pub async fn seed_defaults(db: &Database) -> DbResult<()> {
    seed_admin(db).await?;
    seed_payment_methods(db).await?;
    Ok(())
}

/// Inserts the admin account when the operator directory is empty.
///
/// The password column just mirrors the seeded value; nothing in this
/// backend verifies it (authentication is out of scope).
async fn seed_admin(db: &Database) -> DbResult<()> {
    if db.operators().count().await? > 0 {
        debug!("Operators already present, skipping admin seed");
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO operators (login, name, password, is_admin)
        VALUES ('admin', 'Administrador', 'admin', 1)
        "#,
    )
    .execute(db.pool())
    .await?;

    info!("Seeded default admin operator");
    Ok(())
}

/// Inserts the default payment methods when the registry is empty.
async fn seed_payment_methods(db: &Database) -> DbResult<()> {
    if db.payment_methods().count().await? > 0 {
        debug!("Payment methods already present, skipping seed");
        return Ok(());
    }

    for (label, code, allows_installments, max_installments) in DEFAULT_PAYMENT_METHODS {
        sqlx::query(
            r#"
            INSERT INTO payment_methods (label, payment_code, allows_installments, max_installments)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(label)
        .bind(code)
        .bind(allows_installments)
        .bind(max_installments)
        .execute(db.pool())
        .await?;
    }

    info!(
        count = DEFAULT_PAYMENT_METHODS.len(),
        "Seeded default payment methods"
    );
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
