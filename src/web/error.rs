// HTTP error mapping — the two-tier taxonomy.
//
// Client input errors carry descriptive messages safe to show verbatim.
// Server faults split into two cases: an uninitialized analyzer returns a
// short diagnostic (it matches what the health check already exposes),
// while unexpected faults return a generic message — the detail goes to
// the server log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::pipeline::AnalysisError;

#[derive(Debug)]
pub enum ApiError {
    /// Bad upload — message is shown to the client as-is.
    BadRequest(String),
    /// A model failed to initialize at startup.
    ModelUnavailable(String),
    /// Unexpected server fault — logged in full, generic to the client.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                warn!(%message, "Rejected upload");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::ModelUnavailable(message) => {
                error!(%message, "Analyzer unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Internal(e) => {
                error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::SentimentUnavailable | AnalysisError::EntityModelUnavailable => {
                ApiError::ModelUnavailable(e.to_string())
            }
            // Empty text is caught before analysis; reaching this is a bug.
            AnalysisError::NoContent => ApiError::Internal(e.into()),
        }
    }
}
