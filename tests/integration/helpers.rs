//! Shared test helpers for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::header::{AUTHORIZATION, CONTENT_TYPE, SET_COOKIE};
use http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use tgle_api::{AppState, build_app};
use tgle_auth::{OAuthProfile, OAuthProvider};
use tgle_cache::CacheManager;
use tgle_core::config::AppConfig;
use tgle_core::error::AppError;
use tgle_core::result::AppResult;
use tgle_database::Repositories;
use tgle_storage::StorageManager;

pub const PASSWORD: &str = "violet-harbor-concert-91";
pub const MULTIPART_BOUNDARY: &str = "tgle-test-boundary";
pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

/// Kakao stand-in: the code `"code-<id>"` belongs to Kakao account `<id>`.
#[derive(Debug)]
pub struct StubKakao;

#[async_trait]
impl OAuthProvider for StubKakao {
    fn authorize_url(&self) -> AppResult<String> {
        Ok("https://kauth.kakao.com/oauth/authorize?client_id=test&response_type=code".into())
    }

    async fn exchange_code(&self, code: &str) -> AppResult<OAuthProfile> {
        let id = code
            .strip_prefix("code-")
            .ok_or_else(|| AppError::external_service("Kakao rejected the authorization code"))?;
        Ok(OAuthProfile {
            provider_user_id: id.to_string(),
            email: None,
            nickname: Some("kakao-fan".into()),
            profile_img: None,
        })
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// State shared with the router
    pub state: AppState,
    _uploads: tempfile::TempDir,
}

/// A response with its body parsed as JSON (`Null` when not JSON).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// All `Set-Cookie` header values.
    pub fn cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect()
    }

    /// The `Location` header.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let uploads = tempfile::tempdir().expect("tempdir");

        let mut config = AppConfig::default();
        config.database.provider = "memory".into();
        config.auth.jwt_secret = "integration-test-secret".into();
        config.server.frontend_url = "https://frontend.test".into();
        config.storage.local.root_path = uploads.path().to_string_lossy().into_owned();
        config.storage.local.public_base_url = "http://localhost:3000/uploads".into();

        let cache = Arc::new(CacheManager::new(&config.cache).await.expect("cache"));
        let storage = Arc::new(
            StorageManager::from_config(&config.storage)
                .await
                .expect("storage"),
        );
        let state = AppState::new(
            config,
            Repositories::in_memory(),
            cache,
            storage,
            Arc::new(StubKakao),
        );

        Self {
            router: build_app(state.clone()),
            state,
            _uploads: uploads,
        }
    }

    /// Send a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.send(request).await
    }

    /// Send a prepared request.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Register a local account.
    pub async fn sign_up(&self, email: &str, nickname: &str) -> TestResponse {
        self.request(
            "POST",
            "/users/signup",
            Some(json!({
                "email": email,
                "nickname": nickname,
                "password": PASSWORD,
                "confirmPassword": PASSWORD,
            })),
            None,
        )
        .await
    }

    /// Register an account and return a token for it.
    pub async fn signed_in(&self, email: &str, nickname: &str) -> String {
        let response = self.sign_up(email, nickname).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        let response = self
            .request(
                "POST",
                "/users/login",
                Some(json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.body["jwt"]
            .as_str()
            .expect("jwt in login response")
            .to_string()
    }
}

/// Multipart body with a single file field.
pub fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}
