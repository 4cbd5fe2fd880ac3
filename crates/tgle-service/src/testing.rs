//! Fixtures shared by service tests.

use std::sync::Arc;

use async_trait::async_trait;
use tgle_auth::{JwtDecoder, JwtEncoder, OAuthProfile, OAuthProvider, PasswordHasher, PasswordValidator};
use tgle_cache::CacheManager;
use tgle_core::AppError;
use tgle_core::config::AuthConfig;
use tgle_core::config::cache::CacheConfig;
use tgle_core::result::AppResult;
use tgle_database::Repositories;
use tgle_storage::StorageManager;
use tgle_storage::providers::LocalStorageProvider;

/// OAuth provider that maps the code `"code-<id>"` to Kakao account `<id>`.
#[derive(Debug)]
pub struct StubOAuth;

#[async_trait]
impl OAuthProvider for StubOAuth {
    fn authorize_url(&self) -> AppResult<String> {
        Ok("https://kauth.example/authorize?client_id=test".into())
    }

    async fn exchange_code(&self, code: &str) -> AppResult<OAuthProfile> {
        let id = code
            .strip_prefix("code-")
            .ok_or_else(|| AppError::external_service("bad code"))?;
        Ok(OAuthProfile {
            provider_user_id: id.to_string(),
            email: None,
            nickname: Some("kakao-fan".into()),
            profile_img: None,
        })
    }
}

pub struct Fixture {
    pub repos: Repositories,
    pub hasher: Arc<PasswordHasher>,
    pub validator: Arc<PasswordValidator>,
    pub encoder: Arc<JwtEncoder>,
    pub decoder: Arc<JwtDecoder>,
    pub storage: Arc<StorageManager>,
    pub _dir: tempfile::TempDir,
}

pub async fn fixture() -> Fixture {
    let auth = AuthConfig {
        jwt_secret: "service-test-secret".into(),
        ..Default::default()
    };
    let cache = CacheManager::new(&CacheConfig::default()).await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let provider = LocalStorageProvider::new(dir.path().to_str().unwrap(), "http://files.test")
        .await
        .unwrap();

    Fixture {
        repos: Repositories::in_memory(),
        hasher: Arc::new(PasswordHasher::new()),
        validator: Arc::new(PasswordValidator::new(&auth)),
        encoder: Arc::new(JwtEncoder::new(&auth)),
        decoder: Arc::new(JwtDecoder::new(&auth, Arc::new(cache))),
        storage: Arc::new(StorageManager::new(Arc::new(provider), 1024 * 1024)),
        _dir: dir,
    }
}
