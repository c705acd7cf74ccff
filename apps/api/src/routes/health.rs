use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and whether a remote analysis service is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let analysis_backend = if state.config.analysis_service_url.is_some() {
        "remote_with_fallback"
    } else {
        "heuristic"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerpath-api",
        "analysis_backend": analysis_backend
    }))
}
