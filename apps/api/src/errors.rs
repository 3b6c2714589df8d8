use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::providers::ProviderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The primary data source returned nothing; the response cannot be built.
    #[error("{0}")]
    Aggregation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream provider error: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Not implemented")]
    NotImplemented,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Aggregation(msg) => {
                tracing::error!("Aggregation failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("Upstream provider error: {e}");
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                "This endpoint is not yet implemented".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
