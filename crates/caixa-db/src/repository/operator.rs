//! # Operator Repository
//!
//! Read-only lookups in the operator directory ("usuários").
//!
//! A single admin account is seeded ([`crate::seed`]); there is no signup,
//! password change or authentication flow in this backend. The ledger only
//! needs "does this operator exist, and what's their name".

use sqlx::SqlitePool;

use caixa_core::Operator;

use crate::error::DbResult;

const OPERATOR_SELECT: &str = r#"
    SELECT id, login, name, password, is_admin
    FROM operators
"#;

/// Repository for operator lookups.
#[derive(Debug, Clone)]
pub struct OperatorRepository {
    pool: SqlitePool,
}

impl OperatorRepository {
    /// Creates a new OperatorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OperatorRepository { pool }
    }

    /// Looks up an operator by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Operator>> {
        let operator =
            sqlx::query_as::<_, Operator>(&format!("{OPERATOR_SELECT} WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(operator)
    }

    /// Looks up an operator by login (used by the seed to stay idempotent).
    pub async fn find_by_login(&self, login: &str) -> DbResult<Option<Operator>> {
        let operator =
            sqlx::query_as::<_, Operator>(&format!("{OPERATOR_SELECT} WHERE login = ?1"))
                .bind(login)
                .fetch_optional(&self.pool)
                .await?;

        Ok(operator)
    }

    /// Number of operators in the directory.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM operators")
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
    async fn test_seeded_admin_is_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_defaults(&db).await.unwrap();

        let admin = db.operators().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(admin.login, "admin");
        assert_eq!(admin.name, "Administrador");
        assert!(admin.is_admin);

        let by_login = db
            .operators()
            .find_by_login("admin")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_login.id, admin.id);

        assert!(db.operators().get_by_id(99).await.unwrap().is_none());
    }
}
