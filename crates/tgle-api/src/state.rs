//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tgle_auth::{JwtDecoder, JwtEncoder, OAuthProvider, PasswordHasher, PasswordValidator};
use tgle_cache::CacheManager;
use tgle_core::config::AppConfig;
use tgle_database::Repositories;
use tgle_service::{ArtistLikeService, ArtistService, AuthService, ConcertService, UserService};
use tgle_storage::StorageManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Repositories of the configured database provider
    pub repos: Repositories,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Image storage
    pub storage: Arc<StorageManager>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and account self-service
    pub user_service: Arc<UserService>,
    /// Login, Kakao login, token checks
    pub auth_service: Arc<AuthService>,
    /// Concert listings
    pub concert_service: Arc<ConcertService>,
    /// Artists
    pub artist_service: Arc<ArtistService>,
    /// Artist likes
    pub artist_like_service: Arc<ArtistLikeService>,
}

impl AppState {
    /// Wires the auth primitives and services on top of the infrastructure.
    pub fn new(
        config: AppConfig,
        repos: Repositories,
        cache: Arc<CacheManager>,
        storage: Arc<StorageManager>,
        kakao: Arc<dyn OAuthProvider>,
    ) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, cache.clone()));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            password_validator,
            Arc::clone(&storage),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repos.users),
            password_hasher,
            jwt_encoder,
            jwt_decoder,
            kakao,
        ));
        let concert_service = Arc::new(ConcertService::new(Arc::clone(&repos.concerts)));
        let artist_service = Arc::new(ArtistService::new(Arc::clone(&repos.artists)));
        let artist_like_service = Arc::new(ArtistLikeService::new(
            Arc::clone(&repos.artist_likes),
            Arc::clone(&repos.artists),
        ));

        Self {
            config: Arc::new(config),
            repos,
            cache,
            storage,
            user_service,
            auth_service,
            concert_service,
            artist_service,
            artist_like_service,
        }
    }
}
