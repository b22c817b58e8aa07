//! # caixa-server: HTTP surface for the Caixa PDV backend
//!
//! Thin axum layer over the cash session ledger. Handlers validate the
//! typed payload, delegate to a repository, and map the result into the
//! Portuguese camelCase wire contract the PDV frontend consumes.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/caixa/suprimento  {"valor": 50.0, "descricao": "troco"}     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<MovimentacaoRequest>     ← typed extractor (bad JSON → 400)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  caixa_core::validation        ← valor > 0, descricao present          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.sessions().record_supply() ← one transaction in caixa-db           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<MovementDto>             ← {"tipo": "SUPRIMENTO", "valor": 50.0} │
//! │                                                                         │
//! │  Any error short-circuits through ApiError:                            │
//! │    Conflict → 409, NotFound → 404, Validation → 400, rest → 500,       │
//! │    body always {"erro": "<message>"}                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

use caixa_db::Database;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::build_router;

/// Shared application state, cloned into every handler.
///
/// [`Database`] wraps an Arc'd pool, so this clone is two pointer copies.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}
