//! # Domain Types
//!
//! Core domain types for the cash session ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CashSession    │   │  CashMovement   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  status         │◄──│  session_id     │   │  label          │       │
//! │  │  opening_cents  │   │  kind           │──►│  payment_code   │       │
//! │  │  sales_cents    │   │  amount_cents   │   └─────────────────┘       │
//! │  │  ...            │   │  description    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ SessionStatus   │   │  MovementKind   │   │    Operator     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Open  ABERTO   │   │  Opening        │   │  id, login      │       │
//! │  │  Closed FECHADO │   │  Closing        │   │  name, is_admin │       │
//! │  └─────────────────┘   │  Supply         │   └─────────────────┘       │
//! │                        │  Withdrawal     │                              │
//! │                        │  Sale           │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are monotonic i64 row ids. The movement listing tie-break (same
//! timestamp → insertion order) depends on ids growing with insertion, so
//! random identifiers are not an option here.
//!
//! ## Wire Names
//! The PDV frontend predates this backend, so the serialized names are the
//! Portuguese ones it already consumes: `ABERTO`/`FECHADO` for status and
//! `ABERTURA`/`FECHAMENTO`/`SUPRIMENTO`/`SANGRIA`/`VENDA` for movement
//! kinds. The same spellings are stored in SQLite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Session Status
// =============================================================================

/// The lifecycle state of a cash session.
///
/// Transitions are one-way: a session is created `Open` and closed exactly
/// once. Nothing ever reopens a `Closed` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum SessionStatus {
    /// Register is open and accepting movements.
    #[serde(rename = "ABERTO")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "ABERTO"))]
    Open,
    /// Register has been reconciled and closed.
    #[serde(rename = "FECHADO")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "FECHADO"))]
    Closed,
}

// =============================================================================
// Movement Kind
// =============================================================================

/// The kind of a money movement in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum MovementKind {
    /// Opening float put in the drawer when the session starts.
    #[serde(rename = "ABERTURA")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "ABERTURA"))]
    Opening,
    /// Reconciled balance recorded when the session closes.
    #[serde(rename = "FECHAMENTO")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "FECHAMENTO"))]
    Closing,
    /// Cash added to the drawer mid-session (e.g. change run).
    #[serde(rename = "SUPRIMENTO")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "SUPRIMENTO"))]
    Supply,
    /// Cash removed from the drawer mid-session ("sangria").
    #[serde(rename = "SANGRIA")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "SANGRIA"))]
    Withdrawal,
    /// Revenue from a completed sale.
    #[serde(rename = "VENDA")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "VENDA"))]
    Sale,
}

// =============================================================================
// Movement Descriptions
// =============================================================================

/// Builds the description of the OPENING movement: a fixed label, with the
/// operator's notes appended when present.
pub fn opening_description(notes: &str) -> String {
    compose_description("Abertura de caixa", notes)
}

/// Builds the description of the CLOSING movement.
pub fn closing_description(notes: &str) -> String {
    compose_description("Fechamento de caixa", notes)
}

fn compose_description(label: &str, notes: &str) -> String {
    let notes = notes.trim();
    if notes.is_empty() {
        label.to_string()
    } else {
        format!("{label} - {notes}")
    }
}

// =============================================================================
// Cash Session
// =============================================================================

/// A cash register session ("caixa").
///
/// Created by the open operation, amended by supply/withdrawal/sale
/// movements while open, closed exactly once. The cumulative `*_cents`
/// fields are maintained by the ledger so closing never has to re-sum the
/// movement log.
///
/// ## Invariants
/// - At most one session is `Open` system-wide (enforced by storage).
/// - Once `Closed`: `closing_cents` equals
///   `opening_cents + sales_cents + supplies_cents - withdrawals_cents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CashSession {
    /// Monotonic row id.
    pub id: i64,

    /// Operator who opened the session.
    pub operator_id: i64,

    /// Operator display name, denormalized for the boundary DTOs so the
    /// session never drags a full operator record around.
    pub operator_name: String,

    /// Lifecycle state (ABERTO / FECHADO on the wire).
    pub status: SessionStatus,

    /// When the session was opened.
    pub opened_at: DateTime<Utc>,

    /// When the session was closed. `None` while open.
    pub closed_at: Option<DateTime<Utc>>,

    /// Opening float in centavos.
    pub opening_cents: i64,

    /// Reconciled closing balance. Zero until the session closes.
    pub closing_cents: i64,

    /// Cumulative sales recorded against this session.
    pub sales_cents: i64,

    /// Cumulative supplies (cash added mid-session).
    pub supplies_cents: i64,

    /// Cumulative withdrawals (cash removed mid-session).
    pub withdrawals_cents: i64,

    /// Free-text notes given at open time. Empty when none were given.
    pub opening_notes: String,

    /// Free-text notes given at close time. Empty until closed.
    pub closing_notes: String,
}

impl CashSession {
    /// Opening float as Money.
    #[inline]
    pub fn opening(&self) -> Money {
        Money::from_cents(self.opening_cents)
    }

    /// Recorded closing balance as Money.
    #[inline]
    pub fn closing(&self) -> Money {
        Money::from_cents(self.closing_cents)
    }

    /// Cumulative sales as Money.
    #[inline]
    pub fn sales(&self) -> Money {
        Money::from_cents(self.sales_cents)
    }

    /// Cumulative supplies as Money.
    #[inline]
    pub fn supplies(&self) -> Money {
        Money::from_cents(self.supplies_cents)
    }

    /// Cumulative withdrawals as Money.
    #[inline]
    pub fn withdrawals(&self) -> Money {
        Money::from_cents(self.withdrawals_cents)
    }

    /// The reconciled balance this session must close at:
    /// opening + sales + supplies - withdrawals.
    ///
    /// The close operation persists exactly this value into
    /// `closing_cents`; nothing else ever computes it.
    #[inline]
    pub fn expected_closing(&self) -> Money {
        self.opening() + self.sales() + self.supplies() - self.withdrawals()
    }

    /// Whether the session is still open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }
}

// =============================================================================
// Cash Movement
// =============================================================================

/// One entry in the append-only movement ledger.
///
/// Movements are written exactly once per ledger operation and never
/// updated or deleted. The optional payment-method reference is flattened
/// to id + label so listings don't need a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CashMovement {
    pub id: i64,
    pub session_id: i64,
    pub kind: MovementKind,
    /// Amount in centavos. Non-negative for every kind except `Closing`,
    /// which records the signed reconciled balance (negative when
    /// withdrawals exceeded opening + sales + supplies).
    pub amount_cents: i64,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    pub payment_method_id: Option<i64>,
    pub payment_method_label: Option<String>,
}

impl CashMovement {
    /// Movement amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// A payment method from the read-only registry ("forma de pagamento").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PaymentMethod {
    pub id: i64,
    /// Display label ("Dinheiro", "PIX", ...). Report maps key on this.
    pub label: String,
    /// Fiscal payment-type code ("01" = cash, "03" = credit, "17" = PIX).
    pub payment_code: String,
    pub allows_installments: bool,
    pub max_installments: i64,
}

// =============================================================================
// Operator
// =============================================================================

/// A register operator ("usuário"). A single admin account is seeded; there
/// is no authentication flow, the password column just mirrors the seeded
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Operator {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub password: String,
    pub is_admin: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(opening: i64, sales: i64, supplies: i64, withdrawals: i64) -> CashSession {
        CashSession {
            id: 1,
            operator_id: 1,
            operator_name: "Administrador".to_string(),
            status: SessionStatus::Open,
            opened_at: Utc::now(),
            closed_at: None,
            opening_cents: opening,
            closing_cents: 0,
            sales_cents: sales,
            supplies_cents: supplies,
            withdrawals_cents: withdrawals,
            opening_notes: String::new(),
            closing_notes: String::new(),
        }
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Open).unwrap(),
            "\"ABERTO\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Closed).unwrap(),
            "\"FECHADO\""
        );
    }

    #[test]
    fn test_movement_kind_wire_names() {
        let pairs = [
            (MovementKind::Opening, "\"ABERTURA\""),
            (MovementKind::Closing, "\"FECHAMENTO\""),
            (MovementKind::Supply, "\"SUPRIMENTO\""),
            (MovementKind::Withdrawal, "\"SANGRIA\""),
            (MovementKind::Sale, "\"VENDA\""),
        ];
        for (kind, expected) in pairs {
            assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        }
    }

    #[test]
    fn test_expected_closing_formula() {
        // 100.00 + 30.00 + 50.00 - 20.00 = 160.00
        let s = session(10_000, 3_000, 5_000, 2_000);
        assert_eq!(s.expected_closing().cents(), 16_000);

        // Withdrawals can push the balance below the opening float
        let s = session(10_000, 0, 0, 9_000);
        assert_eq!(s.expected_closing().cents(), 1_000);
    }

    #[test]
    fn test_opening_description() {
        assert_eq!(opening_description(""), "Abertura de caixa");
        assert_eq!(opening_description("   "), "Abertura de caixa");
        assert_eq!(
            opening_description("troco inicial"),
            "Abertura de caixa - troco inicial"
        );
    }

    #[test]
    fn test_closing_description() {
        assert_eq!(closing_description(""), "Fechamento de caixa");
        assert_eq!(
            closing_description("sem divergências"),
            "Fechamento de caixa - sem divergências"
        );
    }
}
