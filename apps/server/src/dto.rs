//! Wire DTOs: the Portuguese camelCase contract the PDV frontend consumes.
//!
//! ## Why DTOs At All
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Persisted entities (caixa-core)        Wire shapes (this module)      │
//! │                                                                         │
//! │  CashSession { opening_cents: i64 }  →  SessionDto { valorAbertura:    │
//! │                                           100.0 }                       │
//! │  CashMovement { payment_method_id,   →  MovementDto { formaPagamento:  │
//! │                 payment_method_label }     {id, descricao} }            │
//! │                                                                         │
//! │  • Amounts convert centavos ↔ decimal reais exactly once, here         │
//! │  • Relationships flatten to small refs — no recursive serialization    │
//! │  • Field names are the frontend's (usuarioId, valorSangrias, ...)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests are typed structs: a wrong type or a missing required field is
//! rejected by the extractor before any handler logic runs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caixa_core::{
    CashMovement, CashSession, Money, MovementKind, PaymentMethod, SessionReport, SessionStatus,
};

// =============================================================================
// Requests
// =============================================================================

/// `POST /api/caixa/abrir`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbrirCaixaRequest {
    pub usuario_id: i64,
    pub valor_abertura: f64,
    #[serde(default)]
    pub observacoes: Option<String>,
    #[serde(default)]
    pub forma_pagamento_id: Option<i64>,
}

/// `POST /api/caixa/fechar`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FecharCaixaRequest {
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// `POST /api/caixa/suprimento` and `POST /api/caixa/sangria`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovimentacaoRequest {
    pub valor: f64,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub forma_pagamento_id: Option<i64>,
}

// =============================================================================
// Responses
// =============================================================================

/// Operator reference inside a session snapshot.
#[derive(Debug, Serialize)]
pub struct UsuarioDto {
    pub id: i64,
    pub nome: String,
}

/// A cash session snapshot on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: i64,
    pub data_hora_abertura: DateTime<Utc>,
    pub data_hora_fechamento: Option<DateTime<Utc>>,
    pub valor_abertura: f64,
    pub valor_fechamento: f64,
    pub valor_vendas: f64,
    pub valor_suprimentos: f64,
    pub valor_sangrias: f64,
    pub status: SessionStatus,
    pub observacoes: String,
    pub observacoes_fechamento: String,
    pub usuario: UsuarioDto,
}

impl From<CashSession> for SessionDto {
    fn from(session: CashSession) -> Self {
        SessionDto {
            id: session.id,
            data_hora_abertura: session.opened_at,
            data_hora_fechamento: session.closed_at,
            valor_abertura: session.opening().to_reais(),
            valor_fechamento: session.closing().to_reais(),
            valor_vendas: session.sales().to_reais(),
            valor_suprimentos: session.supplies().to_reais(),
            valor_sangrias: session.withdrawals().to_reais(),
            status: session.status,
            observacoes: session.opening_notes,
            observacoes_fechamento: session.closing_notes,
            usuario: UsuarioDto {
                id: session.operator_id,
                nome: session.operator_name,
            },
        }
    }
}

/// Payment-method reference inside a movement.
#[derive(Debug, Serialize)]
pub struct FormaPagamentoRefDto {
    pub id: i64,
    pub descricao: String,
}

/// One ledger entry on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementDto {
    pub id: i64,
    pub tipo: MovementKind,
    pub valor: f64,
    pub descricao: String,
    pub data_hora: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forma_pagamento: Option<FormaPagamentoRefDto>,
}

impl From<CashMovement> for MovementDto {
    fn from(movement: CashMovement) -> Self {
        let forma_pagamento = match (movement.payment_method_id, movement.payment_method_label) {
            (Some(id), Some(descricao)) => Some(FormaPagamentoRefDto { id, descricao }),
            _ => None,
        };

        MovementDto {
            id: movement.id,
            tipo: movement.kind,
            valor: Money::from_cents(movement.amount_cents).to_reais(),
            descricao: movement.description,
            data_hora: movement.occurred_at,
            forma_pagamento,
        }
    }
}

/// A payment method from the registry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDto {
    pub id: i64,
    pub descricao: String,
    pub tipo_pagamento: String,
    pub permite_parcelamento: bool,
    pub max_parcelas: i64,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        PaymentMethodDto {
            id: method.id,
            descricao: method.label,
            tipo_pagamento: method.payment_code,
            permite_parcelamento: method.allows_installments,
            max_parcelas: method.max_installments,
        }
    }
}

/// `GET /api/caixa/status`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub caixa_aberto: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caixa: Option<SessionDto>,
}

impl From<Option<CashSession>> for StatusResponse {
    fn from(session: Option<CashSession>) -> Self {
        StatusResponse {
            caixa_aberto: session.is_some(),
            caixa: session.map(SessionDto::from),
        }
    }
}

/// `GET /api/caixa/{id}/relatorio`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub caixa: SessionDto,
    pub movimentacoes: Vec<MovementDto>,
    pub vendas_por_forma: BTreeMap<String, f64>,
    pub suprimentos_por_forma: BTreeMap<String, f64>,
    pub sangrias_por_forma: BTreeMap<String, f64>,
}

impl From<SessionReport> for ReportDto {
    fn from(report: SessionReport) -> Self {
        ReportDto {
            caixa: report.session.into(),
            movimentacoes: report.movements.into_iter().map(MovementDto::from).collect(),
            vendas_por_forma: to_reais_map(report.sales_by_method),
            suprimentos_por_forma: to_reais_map(report.supplies_by_method),
            sangrias_por_forma: to_reais_map(report.withdrawals_by_method),
        }
    }
}

/// Centavo sums leave the system as decimal reais, keys untouched.
fn to_reais_map(map: BTreeMap<String, Money>) -> BTreeMap<String, f64> {
    map.into_iter()
        .map(|(label, amount)| (label, amount.to_reais()))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
