//! Error types for the validation API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use annexure_engine::{StoreError, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store connectivity problems are 5xx and distinct from "no
        // documents found", which is a 200 with an invalid report.
        let (status, message) = match &self {
            ApiError::Validation(ValidationError::Store(StoreError::Unavailable(reason))) => {
                tracing::error!("document store unavailable: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Document store unavailable".to_string(),
                )
            }
            ApiError::Validation(err @ ValidationError::BulkAborted { completed, .. }) => {
                tracing::error!("bulk validation aborted: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!(
                        "Document store became unavailable; {} LAQ(s) validated before failure",
                        completed
                    ),
                )
            }
            ApiError::Validation(err) => {
                tracing::error!("validation error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Validation error".to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
