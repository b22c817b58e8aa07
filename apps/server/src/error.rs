//! API error type: the single funnel from domain errors to HTTP.
//!
//! ## Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DbError::AlreadyOpen / NotOpen   → Conflict    → 409                  │
//! │  DbError::NotFound / FK violation → NotFound    → 404                  │
//! │  ValidationError (caixa-core)     → Validation  → 400                  │
//! │  Everything else from storage     → Internal    → 500                  │
//! │                                                                         │
//! │  Body is always {"erro": "<message>"} — the shape the frontend         │
//! │  already renders.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal errors log the real cause at error level but keep the wire
//! message generic; storage details are not the frontend's business.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use caixa_core::ValidationError;
use caixa_db::DbError;

/// What the frontend can be told went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Ledger state-machine precondition violated (session already open,
    /// no session open).
    #[error("{0}")]
    Conflict(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// Unexpected storage or server failure. The caller should assume no
    /// state change occurred.
    #[error("erro interno do servidor")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for each variant.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::AlreadyOpen | DbError::NotOpen => ApiError::Conflict(err.to_string()),
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            // A foreign-key violation means the request referenced a row
            // that does not exist; same answer as an explicit lookup miss.
            DbError::ForeignKeyViolation { .. } => ApiError::NotFound(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            ApiError::Internal(cause) => {
                error!(%cause, "Internal server error");
                self.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "erro": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(DbError::AlreadyOpen).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(DbError::NotOpen).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(DbError::not_found("Cash session", "7")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ValidationError::Required {
                field: "descricao".to_string()
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DbError::QueryFailed("disk I/O error".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_hides_cause() {
        let err = ApiError::from(DbError::QueryFailed("disk I/O error".to_string()));
        assert_eq!(err.to_string(), "erro interno do servidor");
    }
}
