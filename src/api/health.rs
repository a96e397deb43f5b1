use axum::response::Json;
use serde_json::{json, Value};

/// Liveness probe. Public, does not touch the database.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
