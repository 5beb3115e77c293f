use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe; does not touch the engine.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
