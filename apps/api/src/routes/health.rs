use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobboard-api",
        "backend": state.backend().map(|b| b.name()),
    }))
}

/// GET /api/v1/backend/ping
/// One cheap read against the backend to prove the credentials work.
pub async fn backend_ping_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let backend = state.backend().ok_or(AppError::BackendNotConfigured)?;
    backend.ping().await?;
    tracing::info!("Backend connection check passed ({})", backend.name());
    Ok(Json(json!({
        "status": "ok",
        "backend": backend.name(),
    })))
}
