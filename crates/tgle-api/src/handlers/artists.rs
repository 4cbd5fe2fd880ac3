//! Artist and artist like handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use tgle_core::error::AppError;
use tgle_core::types::ArtistId;
use tgle_core::types::pagination::PageResponse;
use tgle_entity::artist::ArtistWithLikes;
use tgle_service::LikeStatus;

use crate::dto::request::CreateArtistRequest;
use crate::extractors::path::parse_id;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /artists
pub async fn create_artist(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateArtistRequest>,
) -> Result<(StatusCode, Json<ArtistWithLikes>), AppError> {
    let artist = state.artist_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<ArtistWithLikes>>, AppError> {
    let page = params.into_page_request();
    Ok(Json(state.artist_service.list(&page).await?))
}

/// GET /artists/{id}
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtistWithLikes>, AppError> {
    let id: ArtistId = parse_id(&id)?;
    Ok(Json(state.artist_service.get(id).await?))
}

/// GET /artists/liked
pub async fn liked_artists(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ArtistWithLikes>>, AppError> {
    Ok(Json(state.artist_service.liked_by(&auth).await?))
}

/// POST /artists/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<LikeStatus>, AppError> {
    let id: ArtistId = parse_id(&id)?;
    Ok(Json(state.artist_like_service.toggle(&auth, id).await?))
}

/// GET /artists/{id}/like
pub async fn like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<LikeStatus>, AppError> {
    let id: ArtistId = parse_id(&id)?;
    Ok(Json(state.artist_like_service.status(&auth, id).await?))
}
