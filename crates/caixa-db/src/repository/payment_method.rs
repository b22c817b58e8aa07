//! # Payment Method Repository
//!
//! Read-only access to the payment method registry ("formas de pagamento").
//!
//! Rows come from seeding ([`crate::seed`]); nothing at runtime creates,
//! updates or deletes a payment method. The ledger resolves ids through
//! here when movements are attributed, and the frontend lists the registry
//! to populate its method picker.

use sqlx::SqlitePool;

use caixa_core::PaymentMethod;

use crate::error::DbResult;

const METHOD_SELECT: &str = r#"
    SELECT id, label, payment_code, allows_installments, max_installments
    FROM payment_methods
"#;

/// Repository for payment method lookups.
#[derive(Debug, Clone)]
pub struct PaymentMethodRepository {
    pool: SqlitePool,
}

impl PaymentMethodRepository {
    /// Creates a new PaymentMethodRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PaymentMethodRepository { pool }
    }

    /// Lists every payment method, in seeded (id) order.
    pub async fn list_all(&self) -> DbResult<Vec<PaymentMethod>> {
        let methods =
            sqlx::query_as::<_, PaymentMethod>(&format!("{METHOD_SELECT} ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(methods)
    }

    /// Looks up a payment method by id. Absence is the caller's call to
    /// judge (the ledger turns it into NotFound, the seed just counts).
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<PaymentMethod>> {
        let method =
            sqlx::query_as::<_, PaymentMethod>(&format!("{METHOD_SELECT} WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(method)
    }

    /// Number of registered payment methods.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payment_methods")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::seed;

    #[tokio::test]
    async fn test_seeded_registry_lists_in_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_defaults(&db).await.unwrap();

        let methods = db.payment_methods().list_all().await.unwrap();
        let labels: Vec<&str> = methods.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Dinheiro", "Cartão de Débito", "Cartão de Crédito", "PIX"]
        );

        // Only credit allows installments
        let credit = &methods[2];
        assert!(credit.allows_installments);
        assert_eq!(credit.max_installments, 12);
        assert!(!methods[0].allows_installments);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_defaults(&db).await.unwrap();

        let pix = db.payment_methods().get_by_id(4).await.unwrap().unwrap();
        assert_eq!(pix.label, "PIX");
        assert_eq!(pix.payment_code, "17");

        assert!(db.payment_methods().get_by_id(99).await.unwrap().is_none());
    }
}
