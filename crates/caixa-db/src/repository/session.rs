//! # Session Repository
//!
//! The ledger state machine: cash session lifecycle and the money
//! movements that amend it.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cash Session Lifecycle                              │
//! │                                                                         │
//! │  1. OPEN                                                                │
//! │     └── open() → CashSession { status: ABERTO }                        │
//! │     └── (Also appends the ABERTURA movement in the same transaction)   │
//! │                                                                         │
//! │  2. ADJUST (any number of times, in any order)                         │
//! │     └── record_supply()     → supplies_cents += valor, SUPRIMENTO row  │
//! │     └── record_withdrawal() → withdrawals_cents += valor, SANGRIA row  │
//! │     └── record_sale()       → sales_cents += valor, VENDA row          │
//! │                                                                         │
//! │  3. CLOSE (exactly once)                                               │
//! │     └── close() → CashSession { status: FECHADO }                      │
//! │     └── closing_cents = opening + sales + supplies - withdrawals       │
//! │     └── (Also appends the FECHAMENTO movement in the same transaction) │
//! │                                                                         │
//! │  There is no step 4: a closed session is read-only forever.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! Every mutating operation runs in ONE SQLite transaction: the session
//! insert/update and the movement append commit together or not at all.
//! A movement without its session totals (or vice versa) can never be
//! observed, even across a crash.
//!
//! ## The One-Open-Session Invariant
//! `open()` pre-checks for an open session to give a friendly error, but
//! the invariant itself is carried by the partial unique index on
//! `cash_sessions.status WHERE status = 'ABERTO'`. Two racing opens both
//! pass the pre-check at worst; the second INSERT then loses on the index
//! and surfaces as [`DbError::AlreadyOpen`].

use chrono::Utc;
use sqlx::{SqlitePool, Transaction};
use tracing::{debug, info};

use caixa_core::types::{closing_description, opening_description};
use caixa_core::{CashMovement, CashSession, Money, MovementKind, SessionStatus};

use crate::error::{DbError, DbResult};

/// Columns of a session row as the [`CashSession`] struct expects them.
///
/// The operator name is denormalized into the result via a JOIN so the
/// boundary DTOs never need a second lookup.
const SESSION_SELECT: &str = r#"
    SELECT
        s.id,
        s.operator_id,
        o.name AS operator_name,
        s.status,
        s.opened_at,
        s.closed_at,
        s.opening_cents,
        s.closing_cents,
        s.sales_cents,
        s.supplies_cents,
        s.withdrawals_cents,
        s.opening_notes,
        s.closing_notes
    FROM cash_sessions s
    JOIN operators o ON o.id = s.operator_id
"#;

/// Repository for cash session lifecycle operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Creates a new SessionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SessionRepository { pool }
    }

    // =========================================================================
    // Lifecycle: Open
    // =========================================================================

    /// Opens a new cash session.
    ///
    /// ## Preconditions
    /// - No session currently open → [`DbError::AlreadyOpen`]
    /// - `operator_id` exists → [`DbError::NotFound`]
    /// - `payment_method_id`, when given, exists → [`DbError::NotFound`]
    ///
    /// ## Effects (one transaction)
    /// 1. Inserts the session row with status ABERTO and zeroed cumulatives
    /// 2. Appends the ABERTURA movement with amount = opening float and
    ///    description "Abertura de caixa[ - notes]"
    ///
    /// ## Returns
    /// The freshly created session.
    pub async fn open(
        &self,
        operator_id: i64,
        opening: Money,
        notes: &str,
        payment_method_id: Option<i64>,
    ) -> DbResult<CashSession> {
        debug!(operator_id, opening = %opening, "Opening cash session");

        let mut tx = self.pool.begin().await?;

        // Friendly pre-check; the partial unique index is the real guard.
        if fetch_open(&mut tx).await?.is_some() {
            return Err(DbError::AlreadyOpen);
        }

        // The operator must exist (and we need the name for the snapshot).
        let operator_exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM operators WHERE id = ?1")
                .bind(operator_id)
                .fetch_optional(&mut *tx)
                .await?;
        if operator_exists.is_none() {
            return Err(DbError::not_found("Operator", operator_id.to_string()));
        }

        if let Some(method_id) = payment_method_id {
            resolve_payment_method(&mut tx, method_id).await?;
        }

        let now = Utc::now();
        let notes = notes.trim();

        let result = sqlx::query(
            r#"
            INSERT INTO cash_sessions (
                operator_id, status, opened_at,
                opening_cents, opening_notes
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(operator_id)
        .bind(SessionStatus::Open)
        .bind(now)
        .bind(opening.cents())
        .bind(notes)
        .execute(&mut *tx)
        .await?;

        let session_id = result.last_insert_rowid();

        append_movement(
            &mut tx,
            session_id,
            MovementKind::Opening,
            opening.cents(),
            &opening_description(notes),
            payment_method_id,
        )
        .await?;

        let session = fetch_by_id(&mut tx, session_id)
            .await?
            .ok_or_else(|| DbError::not_found("Cash session", session_id.to_string()))?;

        tx.commit().await?;

        info!(
            session_id,
            operator_id,
            opening = %opening,
            "Cash session opened"
        );

        Ok(session)
    }

    // =========================================================================
    // Lifecycle: Close
    // =========================================================================

    /// Closes the currently open session.
    ///
    /// ## Preconditions
    /// - A session is open → [`DbError::NotOpen`] otherwise
    ///
    /// ## Effects (one transaction)
    /// 1. Computes `closing = opening + sales + supplies - withdrawals`
    ///    from the row as read inside the transaction
    /// 2. Sets status FECHADO, the closing timestamp and the closing notes
    /// 3. Appends the FECHAMENTO movement with amount = closing balance
    ///    (never a payment-method reference: the reconciled balance is not
    ///    attributable to any one method)
    ///
    /// The closing balance is signed: when withdrawals exceed everything
    /// else the session closes in the red and the deficit is recorded
    /// as-is. Close must always succeed on an open session.
    ///
    /// This transition is one-way. Nothing in this crate ever flips a
    /// session back to ABERTO.
    pub async fn close(&self, notes: &str) -> DbResult<CashSession> {
        let mut tx = self.pool.begin().await?;

        let session = fetch_open(&mut tx).await?.ok_or(DbError::NotOpen)?;

        let closing = session.expected_closing();
        let now = Utc::now();
        let notes = notes.trim();

        debug!(
            session_id = session.id,
            closing = %closing,
            "Closing cash session"
        );

        // The status guard makes the update a no-op if anything closed the
        // session since our read; the WAL write lock means that cannot
        // happen inside this transaction, but the guard keeps the UPDATE
        // self-describing.
        let result = sqlx::query(
            r#"
            UPDATE cash_sessions SET
                status = ?2,
                closed_at = ?3,
                closing_cents = ?4,
                closing_notes = ?5
            WHERE id = ?1 AND status = ?6
            "#,
        )
        .bind(session.id)
        .bind(SessionStatus::Closed)
        .bind(now)
        .bind(closing.cents())
        .bind(notes)
        .bind(SessionStatus::Open)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotOpen);
        }

        append_movement(
            &mut tx,
            session.id,
            MovementKind::Closing,
            closing.cents(),
            &closing_description(notes),
            None,
        )
        .await?;

        let closed = fetch_by_id(&mut tx, session.id)
            .await?
            .ok_or_else(|| DbError::not_found("Cash session", session.id.to_string()))?;

        tx.commit().await?;

        info!(
            session_id = closed.id,
            closing = %closing,
            "Cash session closed"
        );

        Ok(closed)
    }

    // =========================================================================
    // Adjustments: Supply / Withdrawal / Sale
    // =========================================================================

    /// Records a supply ("suprimento"): cash added to the drawer mid-session.
    ///
    /// Increments `supplies_cents` and appends a SUPRIMENTO movement in one
    /// transaction. Fails with [`DbError::NotOpen`] when no session is open.
    pub async fn record_supply(
        &self,
        amount: Money,
        description: &str,
        payment_method_id: Option<i64>,
    ) -> DbResult<CashMovement> {
        self.adjust(MovementKind::Supply, amount, description, payment_method_id)
            .await
    }

    /// Records a withdrawal ("sangria"): cash removed from the drawer.
    ///
    /// Increments `withdrawals_cents` and appends a SANGRIA movement. The
    /// closing formula subtracts withdrawals, so this reduces the balance
    /// the session will reconcile at.
    pub async fn record_withdrawal(
        &self,
        amount: Money,
        description: &str,
        payment_method_id: Option<i64>,
    ) -> DbResult<CashMovement> {
        self.adjust(
            MovementKind::Withdrawal,
            amount,
            description,
            payment_method_id,
        )
        .await
    }

    /// Records a completed sale against the open session.
    ///
    /// The sale subsystem itself lives outside this backend; this is the
    /// entry point it calls so revenue lands in `sales_cents` and the
    /// per-method report. Defaults the description to "Venda" when the
    /// caller has nothing better.
    pub async fn record_sale(
        &self,
        amount: Money,
        payment_method_id: Option<i64>,
        description: Option<&str>,
    ) -> DbResult<CashMovement> {
        self.adjust(
            MovementKind::Sale,
            amount,
            description.unwrap_or("Venda"),
            payment_method_id,
        )
        .await
    }

    /// Shared read-modify-write path for supply/withdrawal/sale.
    ///
    /// One transaction: bump the session's cumulative column, append the
    /// movement. Concurrent adjustments serialize on SQLite's write lock,
    /// so increments never lose updates.
    async fn adjust(
        &self,
        kind: MovementKind,
        amount: Money,
        description: &str,
        payment_method_id: Option<i64>,
    ) -> DbResult<CashMovement> {
        let mut tx = self.pool.begin().await?;

        let session = fetch_open(&mut tx).await?.ok_or(DbError::NotOpen)?;

        let method_label = match payment_method_id {
            Some(method_id) => Some(resolve_payment_method(&mut tx, method_id).await?),
            None => None,
        };

        let column = match kind {
            MovementKind::Supply => "supplies_cents",
            MovementKind::Withdrawal => "withdrawals_cents",
            MovementKind::Sale => "sales_cents",
            // Opening/closing amounts are set by open()/close(), never
            // accumulated here.
            MovementKind::Opening | MovementKind::Closing => {
                return Err(DbError::Internal(format!(
                    "movement kind {kind:?} is not an adjustment"
                )));
            }
        };

        debug!(
            session_id = session.id,
            ?kind,
            amount = %amount,
            "Recording movement"
        );

        let update = format!(
            "UPDATE cash_sessions SET {column} = {column} + ?2 WHERE id = ?1 AND status = ?3"
        );
        let result = sqlx::query(&update)
            .bind(session.id)
            .bind(amount.cents())
            .bind(SessionStatus::Open)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotOpen);
        }

        let mut movement = append_movement(
            &mut tx,
            session.id,
            kind,
            amount.cents(),
            description,
            payment_method_id,
        )
        .await?;
        movement.payment_method_label = method_label;

        tx.commit().await?;

        info!(
            movement_id = movement.id,
            session_id = session.id,
            ?kind,
            amount = %amount,
            "Movement recorded"
        );

        Ok(movement)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the open session, if any. Absence is not an error.
    pub async fn find_open(&self) -> DbResult<Option<CashSession>> {
        let session = sqlx::query_as::<_, CashSession>(&format!(
            "{SESSION_SELECT} WHERE s.status = ?1"
        ))
        .bind(SessionStatus::Open)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// Returns a session by id, open or closed.
    pub async fn get_by_id(&self, id: i64) -> DbResult<CashSession> {
        let session = sqlx::query_as::<_, CashSession>(&format!(
            "{SESSION_SELECT} WHERE s.id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        session.ok_or_else(|| DbError::not_found("Cash session", id.to_string()))
    }

    /// Returns every session, most recently opened first.
    pub async fn history(&self) -> DbResult<Vec<CashSession>> {
        let sessions = sqlx::query_as::<_, CashSession>(&format!(
            "{SESSION_SELECT} ORDER BY s.opened_at DESC, s.id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}

// =============================================================================
// Transaction Helpers
// =============================================================================

/// Fetches the open session inside a transaction.
async fn fetch_open(
    tx: &mut Transaction<'_, sqlx::Sqlite>,
) -> DbResult<Option<CashSession>> {
    let session = sqlx::query_as::<_, CashSession>(&format!(
        "{SESSION_SELECT} WHERE s.status = ?1"
    ))
    .bind(SessionStatus::Open)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(session)
}

/// Fetches a session by id inside a transaction.
async fn fetch_by_id(
    tx: &mut Transaction<'_, sqlx::Sqlite>,
    id: i64,
) -> DbResult<Option<CashSession>> {
    let session = sqlx::query_as::<_, CashSession>(&format!(
        "{SESSION_SELECT} WHERE s.id = ?1"
    ))
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(session)
}

/// Resolves a payment-method id to its label, or fails with NotFound.
async fn resolve_payment_method(
    tx: &mut Transaction<'_, sqlx::Sqlite>,
    method_id: i64,
) -> DbResult<String> {
    let label: Option<String> =
        sqlx::query_scalar("SELECT label FROM payment_methods WHERE id = ?1")
            .bind(method_id)
            .fetch_optional(&mut **tx)
            .await?;

    label.ok_or_else(|| DbError::not_found("Payment method", method_id.to_string()))
}

/// Appends one row to the movement ledger inside the caller's transaction.
///
/// Returns the movement as inserted. The payment-method label is left
/// `None`; callers that resolved the method fill it in (the ledger table
/// itself only stores the id).
async fn append_movement(
    tx: &mut Transaction<'_, sqlx::Sqlite>,
    session_id: i64,
    kind: MovementKind,
    amount_cents: i64,
    description: &str,
    payment_method_id: Option<i64>,
) -> DbResult<CashMovement> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO cash_movements (
            session_id, kind, amount_cents,
            description, occurred_at, payment_method_id
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(session_id)
    .bind(kind)
    .bind(amount_cents)
    .bind(description)
    .bind(now)
    .bind(payment_method_id)
    .execute(&mut **tx)
    .await?;

    Ok(CashMovement {
        id: result.last_insert_rowid(),
        session_id,
        kind,
        amount_cents,
        description: description.to_string(),
        occurred_at: now,
        payment_method_id,
        payment_method_label: None,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::seed;
    use caixa_core::{Money, MovementKind, SessionStatus};

    use super::*;

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_defaults(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_open_creates_session_and_opening_movement() {
        let db = test_db().await;

        let session = db
            .sessions()
            .open(1, Money::from_cents(10_000), "", None)
            .await
            .unwrap();

        assert_eq!(session.status, SessionStatus::Open);
        assert_eq!(session.opening_cents, 10_000);
        assert_eq!(session.sales_cents, 0);
        assert_eq!(session.supplies_cents, 0);
        assert_eq!(session.withdrawals_cents, 0);
        assert_eq!(session.closing_cents, 0);
        assert!(session.closed_at.is_none());
        assert_eq!(session.operator_name, "Administrador");

        let movements = db.movements().list_for_session(session.id).await.unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].kind, MovementKind::Opening);
        assert_eq!(movements[0].amount_cents, 10_000);
        assert_eq!(movements[0].description, "Abertura de caixa");
    }

    #[tokio::test]
    async fn test_open_notes_land_in_opening_description() {
        let db = test_db().await;

        let session = db
            .sessions()
            .open(1, Money::from_cents(5_000), "turno da manhã", None)
            .await
            .unwrap();

        assert_eq!(session.opening_notes, "turno da manhã");

        let movements = db.movements().list_for_session(session.id).await.unwrap();
        assert_eq!(
            movements[0].description,
            "Abertura de caixa - turno da manhã"
        );
    }

    #[tokio::test]
    async fn test_second_open_conflicts() {
        let db = test_db().await;
        let sessions = db.sessions();

        sessions.open(1, Money::zero(), "", None).await.unwrap();

        let err = sessions.open(1, Money::zero(), "", None).await.unwrap_err();
        assert!(matches!(err, DbError::AlreadyOpen));

        // Only one session exists, and it is the open one
        assert_eq!(sessions.history().await.unwrap().len(), 1);
        assert!(sessions.find_open().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_open_unknown_operator_is_not_found() {
        let db = test_db().await;

        let err = db
            .sessions()
            .open(999, Money::zero(), "", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        // Nothing was created
        assert!(db.sessions().find_open().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_unknown_payment_method_is_not_found() {
        let db = test_db().await;

        let err = db
            .sessions()
            .open(1, Money::zero(), "", Some(999))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert!(db.sessions().find_open().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_close_applies_reconciliation_formula() {
        let db = test_db().await;
        let sessions = db.sessions();

        // Scenario B: open 100.00, supply 50.00, withdraw 20.00 → close 130.00
        sessions
            .open(1, Money::from_cents(10_000), "", None)
            .await
            .unwrap();
        sessions
            .record_supply(Money::from_cents(5_000), "troco", None)
            .await
            .unwrap();
        sessions
            .record_withdrawal(Money::from_cents(2_000), "retirada", None)
            .await
            .unwrap();

        let closed = sessions.close("").await.unwrap();

        assert_eq!(closed.status, SessionStatus::Closed);
        assert_eq!(closed.supplies_cents, 5_000);
        assert_eq!(closed.withdrawals_cents, 2_000);
        assert_eq!(closed.closing_cents, 13_000);
        assert!(closed.closed_at.is_some());

        // FECHAMENTO movement carries the reconciled balance, no method
        let movements = db.movements().list_for_session(closed.id).await.unwrap();
        let closing = movements
            .iter()
            .find(|m| m.kind == MovementKind::Closing)
            .unwrap();
        assert_eq!(closing.amount_cents, 13_000);
        assert!(closing.payment_method_id.is_none());
    }

    #[tokio::test]
    async fn test_close_with_withdrawals_exceeding_balance() {
        let db = test_db().await;
        let sessions = db.sessions();

        // Open 10.00, withdraw 50.00: the register closes in the red at
        // -40.00. The deficit is recorded, never rejected — a session
        // that cannot close would wedge the whole ledger.
        sessions
            .open(1, Money::from_cents(1_000), "", None)
            .await
            .unwrap();
        sessions
            .record_withdrawal(Money::from_cents(5_000), "malote", None)
            .await
            .unwrap();

        let closed = sessions.close("").await.unwrap();
        assert_eq!(closed.status, SessionStatus::Closed);
        assert_eq!(closed.closing_cents, -4_000);

        // The FECHAMENTO movement carries the signed balance
        let movements = db.movements().list_for_session(closed.id).await.unwrap();
        let closing = movements
            .iter()
            .find(|m| m.kind == MovementKind::Closing)
            .unwrap();
        assert_eq!(closing.amount_cents, -4_000);

        // The register is free again for the next session
        assert!(sessions.find_open().await.unwrap().is_none());
        sessions
            .open(1, Money::from_cents(2_000), "", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_close_without_open_session_conflicts() {
        let db = test_db().await;

        let err = db.sessions().close("").await.unwrap_err();
        assert!(matches!(err, DbError::NotOpen));
    }

    #[tokio::test]
    async fn test_closed_session_stays_closed() {
        let db = test_db().await;
        let sessions = db.sessions();

        sessions
            .open(1, Money::from_cents(1_000), "", None)
            .await
            .unwrap();
        sessions.close("fim").await.unwrap();

        // No open session remains; adjustments and close now conflict
        assert!(sessions.find_open().await.unwrap().is_none());
        assert!(matches!(
            sessions.close("").await.unwrap_err(),
            DbError::NotOpen
        ));

        // A new session can be opened afterwards
        let reopened = sessions
            .open(1, Money::from_cents(2_000), "", None)
            .await
            .unwrap();
        assert_eq!(reopened.opening_cents, 2_000);
    }

    #[tokio::test]
    async fn test_adjustments_require_open_session() {
        let db = test_db().await;
        let sessions = db.sessions();

        let err = sessions
            .record_supply(Money::from_cents(100), "troco", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotOpen));

        let err = sessions
            .record_withdrawal(Money::from_cents(100), "retirada", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotOpen));

        // No ghost movements were written
        assert!(sessions.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_adjustment_with_unknown_method_leaves_totals_untouched() {
        let db = test_db().await;
        let sessions = db.sessions();

        sessions
            .open(1, Money::from_cents(1_000), "", None)
            .await
            .unwrap();

        let err = sessions
            .record_supply(Money::from_cents(500), "troco", Some(999))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let session = sessions.find_open().await.unwrap().unwrap();
        assert_eq!(session.supplies_cents, 0);
        let movements = db.movements().list_for_session(session.id).await.unwrap();
        assert_eq!(movements.len(), 1); // only the opening movement
    }

    #[tokio::test]
    async fn test_record_sale_accumulates_and_labels_method() {
        let db = test_db().await;
        let sessions = db.sessions();

        sessions.open(1, Money::zero(), "", None).await.unwrap();

        // Seeded method 4 is PIX
        let movement = sessions
            .record_sale(Money::from_cents(3_000), Some(4), None)
            .await
            .unwrap();
        assert_eq!(movement.kind, MovementKind::Sale);
        assert_eq!(movement.description, "Venda");
        assert_eq!(movement.payment_method_label.as_deref(), Some("PIX"));

        let session = sessions.find_open().await.unwrap().unwrap();
        assert_eq!(session.sales_cents, 3_000);
    }

    #[tokio::test]
    async fn test_concurrent_opens_yield_exactly_one_session() {
        let db = test_db().await;
        let a = db.sessions();
        let b = db.sessions();

        let (ra, rb) = tokio::join!(
            a.open(1, Money::from_cents(1_000), "", None),
            b.open(1, Money::from_cents(2_000), "", None),
        );

        // Exactly one open succeeds; the loser gets a conflict
        assert_ne!(ra.is_ok(), rb.is_ok());
        let err = if ra.is_err() {
            ra.unwrap_err()
        } else {
            rb.unwrap_err()
        };
        assert!(matches!(err, DbError::AlreadyOpen));

        assert_eq!(db.sessions().history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_most_recently_opened_first() {
        let db = test_db().await;
        let sessions = db.sessions();

        for cents in [1_000, 2_000, 3_000] {
            sessions
                .open(1, Money::from_cents(cents), "", None)
                .await
                .unwrap();
            sessions.close("").await.unwrap();
        }

        let history = sessions.history().await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].opening_cents, 3_000);
        assert_eq!(history[2].opening_cents, 1_000);
    }

    #[tokio::test]
    async fn test_movement_count_identity() {
        let db = test_db().await;
        let sessions = db.sessions();

        sessions
            .open(1, Money::from_cents(10_000), "", None)
            .await
            .unwrap();
        sessions
            .record_supply(Money::from_cents(100), "s1", None)
            .await
            .unwrap();
        sessions
            .record_withdrawal(Money::from_cents(50), "w1", None)
            .await
            .unwrap();
        sessions
            .record_sale(Money::from_cents(200), Some(1), None)
            .await
            .unwrap();
        let closed = sessions.close("").await.unwrap();

        // 2 (opening + closing) + 3 adjustments
        let movements = db.movements().list_for_session(closed.id).await.unwrap();
        assert_eq!(movements.len(), 5);
    }
}
