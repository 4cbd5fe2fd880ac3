//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use tgle_core::result::AppResult;
use tgle_core::traits::CacheProvider;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/detailed
///
/// Responds 503 when any dependency is unhealthy.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let database = describe(state.repos.health_check().await);
    let cache = describe(state.cache.health_check().await);
    let storage = describe(state.storage.health_check().await);

    let healthy = [&database, &cache, &storage].iter().all(|s| s.as_str() == "ok");
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(DetailedHealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            cache,
            storage,
        }),
    )
}

fn describe(result: AppResult<bool>) -> String {
    match result {
        Ok(true) => "ok".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e.message),
    }
}
