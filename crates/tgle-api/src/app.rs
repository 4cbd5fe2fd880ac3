//! Application builder: wires infrastructure, services, and the router.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use tgle_auth::{KakaoOAuthClient, OAuthProvider};
use tgle_cache::CacheManager;
use tgle_core::config::AppConfig;
use tgle_core::error::AppError;
use tgle_database::Repositories;
use tgle_storage::StorageManager;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application for `state`.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Connects every configured backend and assembles the application state.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(provider = %config.database.provider, "Initializing database...");
    let repos = Repositories::connect(&config.database).await?;

    info!(provider = %config.cache.provider, "Initializing cache...");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    info!(provider = %config.storage.provider, "Initializing storage...");
    let storage = Arc::new(StorageManager::from_config(&config.storage).await?);

    let kakao: Arc<dyn OAuthProvider> = Arc::new(KakaoOAuthClient::new(&config.kakao)?);

    Ok(AppState::new(config, repos, cache, storage, kakao))
}
