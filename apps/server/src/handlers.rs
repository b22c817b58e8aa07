//! HTTP handlers: one thin function per boundary operation.
//!
//! Each handler does the same three things, in order: validate the typed
//! payload with `caixa_core::validation`, delegate to a repository, map
//! the result into a wire DTO. Ledger semantics live in caixa-db; no
//! handler reads or writes state directly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

use caixa_core::validation;
use caixa_core::Money;

use crate::dto::{
    AbrirCaixaRequest, FecharCaixaRequest, MovementDto, MovimentacaoRequest, PaymentMethodDto,
    ReportDto, SessionDto, StatusResponse,
};
use crate::error::ApiError;
use crate::AppState;

// =============================================================================
// Session Lifecycle
// =============================================================================

/// `GET /api/caixa/status` — the open session, or an absent-indicator.
pub async fn caixa_status(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, ApiError> {
    let open = state.db.sessions().find_open().await?;
    Ok(Json(StatusResponse::from(open)))
}

/// `POST /api/caixa/abrir` — opens a session.
pub async fn abrir_caixa(
    State(state): State<AppState>,
    Json(req): Json<AbrirCaixaRequest>,
) -> Result<Json<SessionDto>, ApiError> {
    let opening = Money::from_reais(req.valor_abertura);
    validation::validate_opening_amount(opening)?;
    let notes = validation::validate_notes(req.observacoes.as_deref().unwrap_or(""))?;

    debug!(usuario_id = req.usuario_id, valor = %opening, "abrir caixa");

    let session = state
        .db
        .sessions()
        .open(req.usuario_id, opening, &notes, req.forma_pagamento_id)
        .await?;

    Ok(Json(session.into()))
}

/// `POST /api/caixa/fechar` — closes the open session.
pub async fn fechar_caixa(
    State(state): State<AppState>,
    Json(req): Json<FecharCaixaRequest>,
) -> Result<Json<SessionDto>, ApiError> {
    let notes = validation::validate_notes(req.observacoes.as_deref().unwrap_or(""))?;

    let session = state.db.sessions().close(&notes).await?;

    Ok(Json(session.into()))
}

// =============================================================================
// Movements
// =============================================================================

/// `POST /api/caixa/suprimento` — cash into the drawer.
pub async fn registrar_suprimento(
    State(state): State<AppState>,
    Json(req): Json<MovimentacaoRequest>,
) -> Result<Json<MovementDto>, ApiError> {
    let (amount, description) = validate_movimentacao(&req)?;

    let movement = state
        .db
        .sessions()
        .record_supply(amount, &description, req.forma_pagamento_id)
        .await?;

    Ok(Json(movement.into()))
}

/// `POST /api/caixa/sangria` — cash out of the drawer.
pub async fn registrar_sangria(
    State(state): State<AppState>,
    Json(req): Json<MovimentacaoRequest>,
) -> Result<Json<MovementDto>, ApiError> {
    let (amount, description) = validate_movimentacao(&req)?;

    let movement = state
        .db
        .sessions()
        .record_withdrawal(amount, &description, req.forma_pagamento_id)
        .await?;

    Ok(Json(movement.into()))
}

/// Shared validation for suprimento/sangria payloads.
fn validate_movimentacao(req: &MovimentacaoRequest) -> Result<(Money, String), ApiError> {
    let amount = Money::from_reais(req.valor);
    validation::validate_movement_amount(amount)?;
    let description = validation::validate_description(&req.descricao)?;
    Ok((amount, description))
}

/// `GET /api/caixa/movimentacoes` — ledger of the open session (possibly
/// empty, never an error).
pub async fn movimentacoes_atuais(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovementDto>>, ApiError> {
    let movements = state.db.movements().list_for_open_session().await?;
    Ok(Json(movements.into_iter().map(MovementDto::from).collect()))
}

/// `GET /api/caixa/{id}/movimentacoes` — ledger of a specific session.
pub async fn movimentacoes_por_caixa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<MovementDto>>, ApiError> {
    let movements = state.db.movements().list_for_session(id).await?;
    Ok(Json(movements.into_iter().map(MovementDto::from).collect()))
}

// =============================================================================
// History & Reporting
// =============================================================================

/// `GET /api/caixa/historico` — all sessions, most recently opened first.
pub async fn historico(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionDto>>, ApiError> {
    let sessions = state.db.sessions().history().await?;
    Ok(Json(sessions.into_iter().map(SessionDto::from).collect()))
}

/// `GET /api/caixa/{id}/relatorio` — per-payment-method reconciliation
/// report for one session, open or closed.
pub async fn relatorio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReportDto>, ApiError> {
    let report = state.db.movements().report(id).await?;
    Ok(Json(report.into()))
}

// =============================================================================
// Registry & Health
// =============================================================================

/// `GET /api/formas-pagamento` — the payment method registry.
pub async fn listar_formas_pagamento(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMethodDto>>, ApiError> {
    let methods = state.db.payment_methods().list_all().await?;
    Ok(Json(methods.into_iter().map(PaymentMethodDto::from).collect()))
}

/// `GET /health` — storage liveness.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if state.db.health_check().await {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
    }
}
