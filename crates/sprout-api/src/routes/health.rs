//! Liveness route.

use axum::Json;
use serde_json::{json, Value};

pub async fn status() -> Json<Value> {
    Json(json!({ "status": "Sprout Backend Online" }))
}
