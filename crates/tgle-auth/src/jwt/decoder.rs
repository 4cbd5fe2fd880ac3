//! JWT token validation and revocation.

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::warn;

use tgle_cache::keys;
use tgle_core::config::AuthConfig;
use tgle_core::error::AppError;
use tgle_core::traits::CacheProvider;

use super::claims::Claims;

/// Validates JWT tokens and maintains the revocation list.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
    cache: Arc<dyn CacheProvider>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, cache: Arc<dyn CacheProvider>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            cache,
        }
    }

    /// Decodes a token, checking signature, expiry, and revocation.
    pub async fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.verify(token)?;

        if self.is_revoked(&claims).await {
            return Err(AppError::unauthorized("Token has been revoked"));
        }

        Ok(claims)
    }

    /// Signature and expiry check only.
    fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Cache failures are treated as "not revoked" so that a cache outage
    /// does not lock every user out.
    async fn is_revoked(&self, claims: &Claims) -> bool {
        let key = keys::revoked_token(&claims.jti.to_string());
        match self.cache.exists(&key).await {
            Ok(revoked) => revoked,
            Err(e) => {
                warn!(error = %e, "Revocation lookup failed, treating token as not revoked");
                false
            }
        }
    }

    /// Revokes a token until it would have expired anyway.
    pub async fn revoke(&self, claims: &Claims) -> Result<(), AppError> {
        let key = keys::revoked_token(&claims.jti.to_string());
        let ttl = Duration::from_secs(claims.remaining_ttl_seconds().max(60));
        self.cache.set(&key, "revoked", ttl).await
    }
}
