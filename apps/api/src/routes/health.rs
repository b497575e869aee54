use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Plain-text liveness string, kept stable for external monitors.
pub async fn root_handler() -> &'static str {
    "Career API backend is running"
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": "0.1.0",
        "service": "careerpath-api"
    }))
}
