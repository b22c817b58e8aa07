//! Route table: URL → handler.
//!
//! Paths are the ones the PDV frontend already calls; nothing here is
//! free to rename. The router is built as a function of [`AppState`] so
//! integration tests can drive it with `tower::ServiceExt::oneshot`
//! against an in-memory database, no socket involved.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/caixa/status", get(handlers::caixa_status))
        .route("/api/caixa/abrir", post(handlers::abrir_caixa))
        .route("/api/caixa/fechar", post(handlers::fechar_caixa))
        // Movements
        .route("/api/caixa/suprimento", post(handlers::registrar_suprimento))
        .route("/api/caixa/sangria", post(handlers::registrar_sangria))
        .route("/api/caixa/movimentacoes", get(handlers::movimentacoes_atuais))
        .route(
            "/api/caixa/:id/movimentacoes",
            get(handlers::movimentacoes_por_caixa),
        )
        // History & reporting
        .route("/api/caixa/historico", get(handlers::historico))
        .route("/api/caixa/:id/relatorio", get(handlers::relatorio))
        // Registry & health
        .route(
            "/api/formas-pagamento",
            get(handlers::listar_formas_pagamento),
        )
        .route("/health", get(handlers::health))
        // Request tracing, and permissive CORS because the frontend runs
        // on its own origin during development
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
