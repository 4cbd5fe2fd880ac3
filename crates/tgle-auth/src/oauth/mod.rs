//! Social login providers.

pub mod kakao;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tgle_core::result::AppResult;

pub use kakao::KakaoOAuthClient;

/// Identity returned by a provider after a successful code exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthProfile {
    /// Account id at the provider.
    pub provider_user_id: String,
    /// Email, if the user consented to share it.
    pub email: Option<String>,
    /// Display name at the provider.
    pub nickname: Option<String>,
    /// Profile image URL at the provider.
    pub profile_img: Option<String>,
}

/// An OAuth 2.0 authorization-code provider.
#[async_trait]
pub trait OAuthProvider: Send + Sync + std::fmt::Debug + 'static {
    /// URL the browser is redirected to in order to start the login.
    fn authorize_url(&self) -> AppResult<String>;

    /// Exchange an authorization code for the user's profile.
    async fn exchange_code(&self, code: &str) -> AppResult<OAuthProfile>;
}
