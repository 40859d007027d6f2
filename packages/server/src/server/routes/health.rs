use axum::Json;
use chrono::Utc;
use serde_json::json;

/// Health check endpoint
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
