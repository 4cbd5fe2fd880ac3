//! JWT token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use tgle_core::config::AuthConfig;
use tgle_core::error::AppError;
use tgle_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: i64::try_from(config.jwt_ttl_hours).unwrap_or(i64::MAX),
        }
    }

    /// Signs a token for the given user.
    pub fn generate_token(
        &self,
        user_id: UserId,
        email: &str,
        nickname: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = Duration::try_hours(self.ttl_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Token TTL of {} hours is out of range",
                    self.ttl_hours
                ))
            })?;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            nickname: nickname.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use tgle_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_out_of_range_ttl_is_a_configuration_error() {
        let config = AuthConfig {
            jwt_ttl_hours: u64::MAX,
            ..Default::default()
        };
        let err = JwtEncoder::new(&config)
            .generate_token(UserId(1), "fan@tgle.ml", "fan")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
