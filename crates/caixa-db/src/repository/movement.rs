//! # Movement Repository
//!
//! Read side of the append-only movement ledger.
//!
//! ## Listing Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Movements list newest first: ORDER BY occurred_at DESC.               │
//! │                                                                         │
//! │  SQLite timestamps have finite resolution, so two movements written    │
//! │  back-to-back can share one. Ties break by ascending id — insertion    │
//! │  order, because ids are AUTOINCREMENT — which keeps repeated listings  │
//! │  byte-for-byte identical until something new is written.               │
//! │                                                                         │
//! │    occurred_at          id    shown                                    │
//! │    10:05:03             7     1st   (newest)                           │
//! │    10:01:00             3     2nd   ┐ same second:                     │
//! │    10:01:00             4     3rd   ┘ id ascending                     │
//! │    10:00:00             1     4th   (the opening movement)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes happen in [`SessionRepository`](super::session::SessionRepository);
//! this repository never inserts, updates or deletes.

use sqlx::SqlitePool;
use tracing::debug;

use caixa_core::{CashMovement, SessionReport};

use crate::error::{DbError, DbResult};

/// Movement columns as [`CashMovement`] expects them, with the
/// payment-method label joined in.
const MOVEMENT_SELECT: &str = r#"
    SELECT
        m.id,
        m.session_id,
        m.kind,
        m.amount_cents,
        m.description,
        m.occurred_at,
        m.payment_method_id,
        p.label AS payment_method_label
    FROM cash_movements m
    LEFT JOIN payment_methods p ON p.id = m.payment_method_id
"#;

/// Deterministic ledger listing order (see module docs).
const MOVEMENT_ORDER: &str = "ORDER BY m.occurred_at DESC, m.id ASC";

/// Repository for ledger reads and report aggregation.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    /// Creates a new MovementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MovementRepository { pool }
    }

    /// Lists all movements of a session, newest first.
    ///
    /// Fails with [`DbError::NotFound`] when the session id is unknown —
    /// the caller asked about a specific session, so an empty answer would
    /// hide a typo'd id.
    pub async fn list_for_session(&self, session_id: i64) -> DbResult<Vec<CashMovement>> {
        self.require_session(session_id).await?;

        let movements = sqlx::query_as::<_, CashMovement>(&format!(
            "{MOVEMENT_SELECT} WHERE m.session_id = ?1 {MOVEMENT_ORDER}"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(session_id, count = movements.len(), "Listed movements");

        Ok(movements)
    }

    /// Lists the movements of the currently open session.
    ///
    /// Returns an empty list when no session is open — "nothing is
    /// happening at the register" is a normal answer, not an error.
    pub async fn list_for_open_session(&self) -> DbResult<Vec<CashMovement>> {
        let movements = sqlx::query_as::<_, CashMovement>(&format!(
            r#"
            {MOVEMENT_SELECT}
            WHERE m.session_id = (
                SELECT id FROM cash_sessions WHERE status = 'ABERTO'
            )
            {MOVEMENT_ORDER}
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(movements)
    }

    /// Builds the reconciliation report for a session, open or closed.
    ///
    /// Fetches the session snapshot and the full movement list, then hands
    /// the math to [`SessionReport::build`] — the grouping rules live in
    /// caixa-core, storage only supplies rows.
    pub async fn report(&self, session_id: i64) -> DbResult<SessionReport> {
        // get_by_id carries the NotFound for unknown ids
        let session = crate::repository::session::SessionRepository::new(self.pool.clone())
            .get_by_id(session_id)
            .await?;

        let movements = sqlx::query_as::<_, CashMovement>(&format!(
            "{MOVEMENT_SELECT} WHERE m.session_id = ?1 {MOVEMENT_ORDER}"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            session_id,
            movements = movements.len(),
            "Building session report"
        );

        Ok(SessionReport::build(session, movements))
    }

    /// Fails with NotFound unless the session exists.
    async fn require_session(&self, session_id: i64) -> DbResult<()> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM cash_sessions WHERE id = ?1")
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await?;

        match exists {
            Some(_) => Ok(()),
            None => Err(DbError::not_found("Cash session", session_id.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use crate::seed;
    use caixa_core::{Money, MovementKind};

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_defaults(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_list_unknown_session_is_not_found() {
        let db = test_db().await;

        let err = db.movements().list_for_session(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_for_open_session_is_empty_when_closed() {
        let db = test_db().await;

        // No session at all
        assert!(db.movements().list_for_open_session().await.unwrap().is_empty());

        // Open, adjust, close: the "current" view empties again
        db.sessions()
            .open(1, Money::from_cents(1_000), "", None)
            .await
            .unwrap();
        db.sessions()
            .record_supply(Money::from_cents(100), "troco", None)
            .await
            .unwrap();
        assert_eq!(db.movements().list_for_open_session().await.unwrap().len(), 2);

        db.sessions().close("").await.unwrap();
        assert!(db.movements().list_for_open_session().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_with_id_tiebreak() {
        let db = test_db().await;
        let sessions = db.sessions();

        let session = sessions
            .open(1, Money::from_cents(1_000), "", None)
            .await
            .unwrap();
        // Written in one burst, so timestamps can collide at SQLite's
        // resolution; the id tie-break keeps the output deterministic.
        for i in 0..5 {
            sessions
                .record_supply(Money::from_cents(100 + i), &format!("s{i}"), None)
                .await
                .unwrap();
        }

        let first = db.movements().list_for_session(session.id).await.unwrap();
        let second = db.movements().list_for_session(session.id).await.unwrap();

        let ids: Vec<i64> = first.iter().map(|m| m.id).collect();
        let ids_again: Vec<i64> = second.iter().map(|m| m.id).collect();
        assert_eq!(ids, ids_again, "repeated listings must be identical");

        // Newest first overall; within equal timestamps, id ascending
        for pair in first.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            assert!(
                newer.occurred_at > older.occurred_at
                    || (newer.occurred_at == older.occurred_at && newer.id < older.id),
                "ordering violated between {} and {}",
                newer.id,
                older.id
            );
        }
    }

    #[tokio::test]
    async fn test_report_groups_by_method_and_drops_unattributed() {
        let db = test_db().await;
        let sessions = db.sessions();

        // Scenario E: one PIX sale of 30.00, one unattributed sale of 10.00
        let session = sessions.open(1, Money::zero(), "", None).await.unwrap();
        sessions
            .record_sale(Money::from_cents(3_000), Some(4), None) // PIX
            .await
            .unwrap();
        sessions
            .record_sale(Money::from_cents(1_000), None, None)
            .await
            .unwrap();

        let report = db.movements().report(session.id).await.unwrap();

        assert_eq!(report.sales_by_method.len(), 1);
        assert_eq!(
            report.sales_by_method.get("PIX"),
            Some(&Money::from_cents(3_000))
        );

        // Both sales remain visible in the ledger and in the totals
        assert_eq!(report.session.sales_cents, 4_000);
        let sales = report
            .movements
            .iter()
            .filter(|m| m.kind == MovementKind::Sale)
            .count();
        assert_eq!(sales, 2);
    }

    #[tokio::test]
    async fn test_report_covers_all_three_maps() {
        let db = test_db().await;
        let sessions = db.sessions();

        let session = sessions
            .open(1, Money::from_cents(10_000), "", None)
            .await
            .unwrap();
        sessions
            .record_sale(Money::from_cents(3_050), Some(1), None) // Dinheiro
            .await
            .unwrap();
        sessions
            .record_sale(Money::from_cents(1_999), Some(1), None)
            .await
            .unwrap();
        sessions
            .record_supply(Money::from_cents(5_000), "troco", Some(1))
            .await
            .unwrap();
        sessions
            .record_withdrawal(Money::from_cents(2_000), "malote", Some(1))
            .await
            .unwrap();
        sessions.close("").await.unwrap();

        let report = db.movements().report(session.id).await.unwrap();

        assert_eq!(
            report.sales_by_method.get("Dinheiro"),
            Some(&Money::from_cents(5_049))
        );
        assert_eq!(
            report.supplies_by_method.get("Dinheiro"),
            Some(&Money::from_cents(5_000))
        );
        assert_eq!(
            report.withdrawals_by_method.get("Dinheiro"),
            Some(&Money::from_cents(2_000))
        );
    }

    #[tokio::test]
    async fn test_report_unknown_session_is_not_found() {
        let db = test_db().await;

        let err = db.movements().report(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
