//! User handlers: sign-up, login, Kakao login, account self-service, logout.

use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use tracing::warn;

use tgle_core::config::AuthConfig;
use tgle_core::error::AppError;
use tgle_service::LoginOutcome;

use crate::dto::request::{
    KakaoCallbackQuery, LoginRequest, NicknameQuery, SignUpRequest, UpdateUserInfoRequest,
};
use crate::dto::response::{LoginResponse, MessageResponse, UserResponse};
use crate::extractors::{AuthUser, ValidatedJson, extract_token};
use crate::state::AppState;

/// Multipart field carrying the profile image.
const PROFILE_IMAGE_FIELD: &str = "profileImg";

/// POST /users/signup
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.user_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/signup?nickname=
pub async fn check_nickname(
    State(state): State<AppState>,
    Query(query): Query<NicknameQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let nickname = query.nickname.unwrap_or_default();
    state.user_service.check_nickname(&nickname).await?;
    Ok(Json(MessageResponse::ok(format!(
        "Nickname '{nickname}' is available"
    ))))
}

/// POST /users/login
pub async fn log_in(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, HeaderMap, Json<LoginResponse>), AppError> {
    let result = state.auth_service.login(&req.email, &req.password).await?;
    let auth = &state.config.auth;

    let mut headers = HeaderMap::new();
    let name = HeaderName::from_bytes(auth.cookie_name.as_bytes())
        .map_err(|e| AppError::configuration(format!("Invalid token header name: {e}")))?;
    let value = HeaderValue::from_str(&result.jwt)
        .map_err(|e| AppError::internal(format!("Token is not a valid header value: {e}")))?;
    headers.insert(name, value);

    let jar = jar.add(token_cookie(auth, result.jwt.clone()));
    Ok((
        jar,
        headers,
        Json(LoginResponse {
            jwt: result.jwt,
            nickname: result.nickname,
        }),
    ))
}

/// GET /users/kakao
pub async fn kakao_login(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let url = state.auth_service.kakao_authorize_url()?;
    Ok(Redirect::to(&url))
}

/// GET /users/oauth/kakao/callback?code=
///
/// The token cookie is only set when an existing account logged in; a fresh
/// sign-up is sent to the frontend without a session.
pub async fn kakao_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<KakaoCallbackQuery>,
) -> Result<(CookieJar, Redirect), AppError> {
    if let Some(error) = query.error {
        warn!(error = %error, description = ?query.error_description, "Kakao login was not completed");
        return Err(AppError::unauthorized(format!("Kakao login failed: {error}")));
    }
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::validation("Missing authorization code"))?;

    let result = state.auth_service.kakao_callback(&code).await?;

    let jar = match result.outcome {
        LoginOutcome::Login => jar.add(token_cookie(&state.config.auth, result.jwt)),
        LoginOutcome::Signup => jar,
    };
    Ok((jar, Redirect::to(&state.config.server.frontend_url)))
}

/// GET /users/userinfo
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.current_user(&auth).await?;
    Ok(Json(user.into()))
}

/// PUT /users/userinfo
pub async fn update_user_info(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserInfoRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.update_info(&auth, req.into()).await?;
    Ok(Json(MessageResponse::ok("User information updated")))
}

/// PUT /users/userinfo/upload
pub async fn update_user_img(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some(PROFILE_IMAGE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;

        let user = state
            .user_service
            .update_profile_img(&auth, data, content_type.as_deref())
            .await?;
        return Ok(Json(user.into()));
    }

    Err(AppError::validation(format!(
        "Multipart field '{PROFILE_IMAGE_FIELD}' is required"
    )))
}

/// POST /users/logout
pub async fn log_out(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let auth = &state.config.auth;
    let token = extract_token(&headers, &auth.cookie_name);
    state.auth_service.logout(token.as_deref()).await?;

    let jar = jar.remove(Cookie::build((auth.cookie_name.clone(), "")).path("/"));
    Ok((jar, Json(MessageResponse::ok("Logged out"))))
}

fn token_cookie(auth: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((auth.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(auth.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}
