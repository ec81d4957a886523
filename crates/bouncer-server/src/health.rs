use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe. Always healthy once the router is up.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check: the index document must exist under the web root.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let index = state.config.index_path();
    match tokio::fs::try_exists(&index).await {
        Ok(true) => (StatusCode::OK, "ready"),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "not ready: index document missing",
        ),
        Err(e) => {
            tracing::warn!(path = %index.display(), "readiness probe failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "not ready: web root unreadable",
            )
        },
    }
}
