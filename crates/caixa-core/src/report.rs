//! # Report Aggregation
//!
//! Pure aggregation of a session's movements into the reconciliation
//! report: the session snapshot, the ordered movement list, and three
//! per-payment-method breakdowns (sales, supplies, withdrawals).
//!
//! ## Grouping Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  movements ──┬── kind VENDA      + payment method ──► sales map        │
//! │              ├── kind SUPRIMENTO + payment method ──► supplies map     │
//! │              ├── kind SANGRIA    + payment method ──► withdrawals map  │
//! │              └── no payment method ──────────────────► (not mapped)    │
//! │                                                                         │
//! │  Keys are payment-method labels; values are exact centavo sums.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Movements without a payment-method reference are deliberately left out
//! of all three maps. That matches what the PDV frontend has always been
//! shown: an unattributed cash sale appears in the movement list and in the
//! session totals, but not in the per-method breakdown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CashMovement, CashSession, MovementKind};

// =============================================================================
// Session Report
// =============================================================================

/// End-of-session reconciliation report.
///
/// Built purely from a session and its movements; storage only fetches,
/// this module does all the math. `BTreeMap` keeps the map order (and the
/// serialized JSON) deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub session: CashSession,
    /// Full movement list, in the ledger's listing order (newest first).
    pub movements: Vec<CashMovement>,
    /// Sales totals keyed by payment-method label.
    pub sales_by_method: BTreeMap<String, Money>,
    /// Supply totals keyed by payment-method label.
    pub supplies_by_method: BTreeMap<String, Money>,
    /// Withdrawal totals keyed by payment-method label.
    pub withdrawals_by_method: BTreeMap<String, Money>,
}

impl SessionReport {
    /// Aggregates the movement list into the three per-method maps.
    ///
    /// Only movements carrying a payment-method reference contribute;
    /// OPENING and CLOSING movements never do (closing has no method at
    /// all, opening only informationally) and are skipped by kind anyway.
    pub fn build(session: CashSession, movements: Vec<CashMovement>) -> Self {
        let mut sales_by_method: BTreeMap<String, Money> = BTreeMap::new();
        let mut supplies_by_method: BTreeMap<String, Money> = BTreeMap::new();
        let mut withdrawals_by_method: BTreeMap<String, Money> = BTreeMap::new();

        for movement in &movements {
            let label = match &movement.payment_method_label {
                Some(label) => label.clone(),
                None => continue,
            };

            let map = match movement.kind {
                MovementKind::Sale => &mut sales_by_method,
                MovementKind::Supply => &mut supplies_by_method,
                MovementKind::Withdrawal => &mut withdrawals_by_method,
                MovementKind::Opening | MovementKind::Closing => continue,
            };

            *map.entry(label).or_insert_with(Money::zero) += movement.amount();
        }

        SessionReport {
            session,
            movements,
            sales_by_method,
            supplies_by_method,
            withdrawals_by_method,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionStatus;
    use chrono::Utc;

    fn session() -> CashSession {
        CashSession {
            id: 1,
            operator_id: 1,
            operator_name: "Administrador".to_string(),
            status: SessionStatus::Open,
            opened_at: Utc::now(),
            closed_at: None,
            opening_cents: 10_000,
            closing_cents: 0,
            sales_cents: 4_000,
            supplies_cents: 0,
            withdrawals_cents: 0,
            opening_notes: String::new(),
            closing_notes: String::new(),
        }
    }

    fn movement(
        id: i64,
        kind: MovementKind,
        amount_cents: i64,
        method: Option<(i64, &str)>,
    ) -> CashMovement {
        CashMovement {
            id,
            session_id: 1,
            kind,
            amount_cents,
            description: "mov".to_string(),
            occurred_at: Utc::now(),
            payment_method_id: method.map(|(id, _)| id),
            payment_method_label: method.map(|(_, label)| label.to_string()),
        }
    }

    #[test]
    fn test_unattributed_movements_are_excluded() {
        // One attributed PIX sale of 30.00, one unattributed sale of 10.00:
        // only the PIX sale shows up in the map.
        let movements = vec![
            movement(1, MovementKind::Sale, 3_000, Some((4, "PIX"))),
            movement(2, MovementKind::Sale, 1_000, None),
        ];

        let report = SessionReport::build(session(), movements);

        assert_eq!(report.sales_by_method.len(), 1);
        assert_eq!(
            report.sales_by_method.get("PIX"),
            Some(&Money::from_cents(3_000))
        );
        assert!(report.supplies_by_method.is_empty());
        assert!(report.withdrawals_by_method.is_empty());
        // The unattributed sale stays visible in the movement list
        assert_eq!(report.movements.len(), 2);
    }

    #[test]
    fn test_sums_accumulate_per_method_exactly() {
        let movements = vec![
            movement(1, MovementKind::Sale, 3_050, Some((1, "Dinheiro"))),
            movement(2, MovementKind::Sale, 1_999, Some((1, "Dinheiro"))),
            movement(3, MovementKind::Sale, 2_500, Some((4, "PIX"))),
            movement(4, MovementKind::Supply, 5_000, Some((1, "Dinheiro"))),
            movement(5, MovementKind::Withdrawal, 2_000, Some((1, "Dinheiro"))),
        ];

        let report = SessionReport::build(session(), movements);

        assert_eq!(
            report.sales_by_method.get("Dinheiro"),
            Some(&Money::from_cents(5_049))
        );
        assert_eq!(
            report.sales_by_method.get("PIX"),
            Some(&Money::from_cents(2_500))
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

    #[test]
    fn test_opening_and_closing_never_mapped() {
        // The opening movement can carry a payment method (the original
        // interface allowed it) but it is not a sale/supply/withdrawal,
        // so no map picks it up.
        let movements = vec![
            movement(1, MovementKind::Opening, 10_000, Some((1, "Dinheiro"))),
            movement(2, MovementKind::Closing, 14_000, None),
        ];

        let report = SessionReport::build(session(), movements);

        assert!(report.sales_by_method.is_empty());
        assert!(report.supplies_by_method.is_empty());
        assert!(report.withdrawals_by_method.is_empty());
    }

    #[test]
    fn test_empty_movements_yield_empty_maps() {
        let report = SessionReport::build(session(), Vec::new());
        assert!(report.movements.is_empty());
        assert!(report.sales_by_method.is_empty());
    }
}
