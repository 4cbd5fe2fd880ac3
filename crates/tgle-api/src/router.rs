//! Route definitions for the TGLE HTTP API.
//!
//! Routes are organized by resource and mounted at the root. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Headroom for multipart framing on top of the largest accepted image.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.storage.max_upload_size_bytes as usize + MULTIPART_OVERHEAD_BYTES;
    let cors = build_cors_layer(&state.config.server.cors, &state.config.auth.cookie_name);

    let mut router = Router::new()
        .merge(user_routes())
        .merge(concert_routes())
        .merge(artist_routes())
        .merge(health_routes());

    if state.config.storage.provider == "local" {
        router = router.nest_service(
            "/uploads",
            ServeDir::new(&state.config.storage.local.root_path),
        );
    }

    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Sign-up, login, Kakao login, account self-service
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/signup",
            post(handlers::users::sign_up).get(handlers::users::check_nickname),
        )
        .route("/users/login", post(handlers::users::log_in))
        .route("/users/logout", post(handlers::users::log_out))
        .route("/users/kakao", get(handlers::users::kakao_login))
        .route(
            "/users/oauth/kakao/callback",
            get(handlers::users::kakao_callback),
        )
        .route(
            "/users/userinfo",
            get(handlers::users::get_current_user).put(handlers::users::update_user_info),
        )
        .route(
            "/users/userinfo/upload",
            put(handlers::users::update_user_img),
        )
}

/// Concert listings
fn concert_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/concerts",
            get(handlers::concerts::list_concerts).post(handlers::concerts::create_concert),
        )
        .route(
            "/concerts/{id}",
            get(handlers::concerts::get_concert).delete(handlers::concerts::delete_concert),
        )
}

/// Artists and likes
fn artist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/artists",
            get(handlers::artists::list_artists).post(handlers::artists::create_artist),
        )
        .route("/artists/liked", get(handlers::artists::liked_artists))
        .route("/artists/{id}", get(handlers::artists::get_artist))
        .route(
            "/artists/{id}/like",
            get(handlers::artists::like_status).post(handlers::artists::toggle_like),
        )
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
