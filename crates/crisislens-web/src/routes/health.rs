//! Health check route handler.

use axum::Json;
use serde_json::{json, Value};

/// GET /health - Liveness probe, independent of model configuration.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
