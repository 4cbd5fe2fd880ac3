//! Authentication service: credential login, Kakao login, token checks.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use tgle_auth::jwt::{JwtDecoder, JwtEncoder};
use tgle_auth::oauth::{OAuthProfile, OAuthProvider};
use tgle_auth::password::PasswordHasher;
use tgle_core::error::{AppError, ErrorKind};
use tgle_database::repositories::UserRepository;
use tgle_entity::user::{AuthProvider, CreateUser, User};

use crate::context::RequestContext;

/// Nickname used when the provider does not share one.
const DEFAULT_SOCIAL_NICKNAME: &str = "kakao_user";
/// Numbered suffixes tried before falling back to the provider id.
const NICKNAME_ATTEMPTS: u32 = 50;

/// Result of a credential login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub jwt: String,
    pub nickname: String,
}

/// Whether a social login matched an existing account or created one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginOutcome {
    Login,
    Signup,
}

/// Result of a social login callback.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLoginResult {
    pub outcome: LoginOutcome,
    pub jwt: String,
    pub nickname: String,
}

/// Handles login, social login, token verification, and logout.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    kakao: Arc<dyn OAuthProvider>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        kakao: Arc<dyn OAuthProvider>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            decoder,
            kakao,
        }
    }

    /// Verifies email and password and signs a token.
    ///
    /// Unknown email, wrong password, and social-only accounts all yield the
    /// same unauthorized error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let invalid = || AppError::unauthorized("Invalid email or password");

        let user = self.users.find_by_email(email).await?.ok_or_else(invalid)?;
        let hash = user.password_hash.as_deref().ok_or_else(invalid)?;

        if !self.hasher.verify_password(password, hash)? {
            warn!(user_id = %user.user_id, "Login failed: wrong password");
            return Err(invalid());
        }

        let jwt = self.sign(&user)?;
        info!(user_id = %user.user_id, "User logged in");
        Ok(LoginResult {
            jwt,
            nickname: user.nickname,
        })
    }

    /// URL that starts the Kakao login.
    pub fn kakao_authorize_url(&self) -> Result<String, AppError> {
        self.kakao.authorize_url()
    }

    /// Completes a Kakao login: finds the linked account or creates one.
    pub async fn kakao_callback(&self, code: &str) -> Result<SocialLoginResult, AppError> {
        let profile = self.kakao.exchange_code(code).await?;

        let (user, outcome) = match self
            .users
            .find_by_sns(AuthProvider::Kakao, &profile.provider_user_id)
            .await?
        {
            Some(user) => (user, LoginOutcome::Login),
            None => (self.create_social_user(&profile).await?, LoginOutcome::Signup),
        };

        let jwt = self.sign(&user)?;
        info!(user_id = %user.user_id, outcome = ?outcome, "Kakao login completed");
        Ok(SocialLoginResult {
            outcome,
            jwt,
            nickname: user.nickname,
        })
    }

    async fn create_social_user(&self, profile: &OAuthProfile) -> Result<User, AppError> {
        let email = match &profile.email {
            Some(email) => {
                if self.users.find_by_email(email).await?.is_some() {
                    return Err(AppError::conflict(format!(
                        "Email '{email}' is already registered with another sign-in method"
                    )));
                }
                email.clone()
            }
            None => format!("kakao_{}@users.tgle.ml", profile.provider_user_id),
        };

        let base = profile
            .nickname
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_SOCIAL_NICKNAME);
        let nickname = self
            .free_nickname(base, &profile.provider_user_id)
            .await?;

        self.users
            .create(&CreateUser {
                email,
                nickname,
                password_hash: None,
                profile_img: profile.profile_img.clone(),
                provider: AuthProvider::Kakao,
                sns_id: Some(profile.provider_user_id.clone()),
            })
            .await
    }

    /// `base`, or `base` with the first free numeric suffix.
    async fn free_nickname(&self, base: &str, provider_user_id: &str) -> Result<String, AppError> {
        if self.users.find_by_nickname(base).await?.is_none() {
            return Ok(base.to_string());
        }
        for n in 1..=NICKNAME_ATTEMPTS {
            let candidate = format!("{base}{n}");
            if self.users.find_by_nickname(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }
        Ok(format!("{base}_{provider_user_id}"))
    }

    /// Verifies a token and builds the request context.
    pub async fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        let claims = self.decoder.decode_token(token).await?;
        RequestContext::from_claims(&claims)
    }

    /// Revokes the presented token, if it is still valid.
    ///
    /// Logging out without a token, or with one that is already invalid,
    /// succeeds.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), AppError> {
        let Some(token) = token else {
            return Ok(());
        };

        match self.decoder.decode_token(token).await {
            Ok(claims) => {
                self.decoder.revoke(&claims).await?;
                info!(user = %claims.sub, "User logged out");
                Ok(())
            }
            Err(e) if e.kind == ErrorKind::Unauthorized => {
                debug!(error = %e, "Logout with an unusable token");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn sign(&self, user: &User) -> Result<String, AppError> {
        self.encoder
            .generate_token(user.user_id, &user.email, &user.nickname)
    }
}
