//! Concert handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use tgle_core::error::AppError;
use tgle_core::types::ConcertId;
use tgle_core::types::pagination::PageResponse;
use tgle_entity::concert::Concert;

use crate::dto::request::CreateConcertRequest;
use crate::dto::response::MessageResponse;
use crate::extractors::path::parse_id;
use crate::extractors::{AuthUser, ConcertListParams, ValidatedJson};
use crate::state::AppState;

/// POST /concerts
pub async fn create_concert(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateConcertRequest>,
) -> Result<(StatusCode, Json<Concert>), AppError> {
    let concert = state.concert_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(concert)))
}

/// GET /concerts
pub async fn list_concerts(
    State(state): State<AppState>,
    Query(params): Query<ConcertListParams>,
) -> Result<Json<PageResponse<Concert>>, AppError> {
    let page = params.page_request();
    let concerts = state
        .concert_service
        .list(params.category_id, &page)
        .await?;
    Ok(Json(concerts))
}

/// GET /concerts/{id}
pub async fn get_concert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Concert>, AppError> {
    let id: ConcertId = parse_id(&id)?;
    Ok(Json(state.concert_service.get(id).await?))
}

/// DELETE /concerts/{id}
pub async fn delete_concert(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: ConcertId = parse_id(&id)?;
    state.concert_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::ok(format!("Concert {id} deleted"))))
}
