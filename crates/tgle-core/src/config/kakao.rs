//! Kakao OAuth configuration.

use serde::{Deserialize, Serialize};

/// Kakao social login settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoConfig {
    /// REST API key of the Kakao application.
    #[serde(default)]
    pub client_id: String,
    /// Optional client secret (only when enabled in the Kakao console).
    #[serde(default)]
    pub client_secret: String,
    /// Callback URL registered with Kakao.
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    /// Authorization endpoint.
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    /// Token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Profile endpoint.
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
    /// HTTP timeout for calls to Kakao, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: default_redirect_uri(),
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
            profile_url: default_profile_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_redirect_uri() -> String {
    "http://localhost:3000/users/oauth/kakao/callback".to_string()
}

fn default_authorize_url() -> String {
    "https://kauth.kakao.com/oauth/authorize".to_string()
}

fn default_token_url() -> String {
    "https://kauth.kakao.com/oauth/token".to_string()
}

fn default_profile_url() -> String {
    "https://kapi.kakao.com/v2/user/me".to_string()
}

fn default_timeout() -> u64 {
    10
}
