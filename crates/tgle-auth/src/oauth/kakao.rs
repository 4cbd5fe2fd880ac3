//! Kakao OAuth client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, info};

use tgle_core::config::KakaoConfig;
use tgle_core::error::{AppError, ErrorKind};
use tgle_core::result::AppResult;

use super::{OAuthProfile, OAuthProvider};

/// Kakao login over `kauth.kakao.com` / `kapi.kakao.com`.
#[derive(Debug, Clone)]
pub struct KakaoOAuthClient {
    http: Client,
    config: KakaoConfig,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct KakaoUser {
    id: i64,
    #[serde(default)]
    kakao_account: Option<KakaoAccount>,
    #[serde(default)]
    properties: Option<KakaoProperties>,
}

#[derive(Debug, Deserialize)]
struct KakaoAccount {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    profile: Option<KakaoProfile>,
}

#[derive(Debug, Deserialize)]
struct KakaoProfile {
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    profile_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KakaoProperties {
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
}

impl From<KakaoUser> for OAuthProfile {
    fn from(user: KakaoUser) -> Self {
        let account = user.kakao_account;
        let profile = account.as_ref().and_then(|a| a.profile.as_ref());
        let properties = user.properties.as_ref();

        Self {
            provider_user_id: user.id.to_string(),
            email: account.as_ref().and_then(|a| a.email.clone()),
            nickname: profile
                .and_then(|p| p.nickname.clone())
                .or_else(|| properties.and_then(|p| p.nickname.clone())),
            profile_img: profile
                .and_then(|p| p.profile_image_url.clone())
                .or_else(|| properties.and_then(|p| p.profile_image.clone())),
        }
    }
}

fn upstream_error(context: &str, e: reqwest::Error) -> AppError {
    AppError::with_source(ErrorKind::ExternalService, format!("Kakao {context} failed: {e}"), e)
}

impl KakaoOAuthClient {
    /// Create a client from configuration.
    pub fn new(config: &KakaoConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    async fn fetch_access_token(&self, code: &str) -> AppResult<String> {
        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ];
        if !self.config.client_secret.is_empty() {
            form.push(("client_secret", self.config.client_secret.as_str()));
        }

        let token: TokenResponse = self
            .http
            .post(&self.config.token_url)
            .form(&form)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| upstream_error("token exchange", e))?
            .json()
            .await
            .map_err(|e| upstream_error("token response", e))?;

        Ok(token.access_token)
    }

    async fn fetch_user(&self, access_token: &str) -> AppResult<KakaoUser> {
        self.http
            .get(&self.config.profile_url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| upstream_error("profile request", e))?
            .json()
            .await
            .map_err(|e| upstream_error("profile response", e))
    }
}

#[async_trait]
impl OAuthProvider for KakaoOAuthClient {
    fn authorize_url(&self) -> AppResult<String> {
        let url = Url::parse_with_params(
            &self.config.authorize_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("response_type", "code"),
            ],
        )
        .map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Invalid kakao.authorize_url", e)
        })?;
        Ok(url.to_string())
    }

    async fn exchange_code(&self, code: &str) -> AppResult<OAuthProfile> {
        if code.trim().is_empty() {
            return Err(AppError::validation("Missing authorization code"));
        }

        let access_token = self.fetch_access_token(code).await?;
        debug!("Kakao access token received");

        let profile = OAuthProfile::from(self.fetch_user(&access_token).await?);
        info!(kakao_id = %profile.provider_user_id, "Kakao profile fetched");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_profile() {
        let json = r#"{
            "id": 2841563920,
            "connected_at": "2022-05-01T09:12:00Z",
            "properties": {"nickname": "legacy", "profile_image": "http://k.kakaocdn.net/old.jpg"},
            "kakao_account": {
                "email": "fan@kakao.com",
                "profile": {"nickname": "콘서트덕후", "profile_image_url": "http://k.kakaocdn.net/new.jpg"}
            }
        }"#;
        let user: KakaoUser = serde_json::from_str(json).unwrap();
        let profile = OAuthProfile::from(user);

        assert_eq!(profile.provider_user_id, "2841563920");
        assert_eq!(profile.email.as_deref(), Some("fan@kakao.com"));
        assert_eq!(profile.nickname.as_deref(), Some("콘서트덕후"));
        assert_eq!(
            profile.profile_img.as_deref(),
            Some("http://k.kakaocdn.net/new.jpg")
        );
    }

    #[test]
    fn test_parse_minimal_profile_falls_back_to_properties() {
        let json = r#"{"id": 42, "properties": {"nickname": "only-props"}}"#;
        let profile = OAuthProfile::from(serde_json::from_str::<KakaoUser>(json).unwrap());

        assert_eq!(profile.provider_user_id, "42");
        assert_eq!(profile.email, None);
        assert_eq!(profile.nickname.as_deref(), Some("only-props"));
        assert_eq!(profile.profile_img, None);
    }

    #[test]
    fn test_authorize_url() {
        let config = KakaoConfig {
            client_id: "abc123".into(),
            redirect_uri: "http://localhost:3000/users/oauth/kakao/callback".into(),
            ..Default::default()
        };
        let url = KakaoOAuthClient::new(&config).unwrap().authorize_url().unwrap();

        assert!(url.starts_with("https://kauth.kakao.com/oauth/authorize?"));
        assert!(url.contains("client_id=abc123"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fusers%2Foauth%2Fkakao%2Fcallback"));
    }
}
