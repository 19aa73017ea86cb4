// GET / — health check.
//
// Reports whether each analyzer initialized, so a deployment probe can
// tell a degraded instance from a healthy one without uploading anything.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "Semantic analysis service is running",
        "nlp_model_loaded": state.analyzers.entities.is_some(),
        "sentiment_analyzer_loaded": state.analyzers.sentiment.is_some(),
    }))
}
