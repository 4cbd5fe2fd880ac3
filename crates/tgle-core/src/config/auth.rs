//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Upper bound for `jwt_ttl_hours` (one year).
pub const MAX_JWT_TTL_HOURS: u64 = 24 * 365;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token TTL in hours.
    #[serde(default = "default_ttl")]
    pub jwt_ttl_hours: u64,
    /// Name of the cookie (and response header) carrying the token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the token cookie `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Minimum zxcvbn strength score (0-4) accepted for new passwords.
    #[serde(default = "default_password_score")]
    pub password_min_score: u8,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_hours: default_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min(),
            password_min_score: default_password_score(),
        }
    }
}

impl AuthConfig {
    /// Reject settings that would make token issuing fail at runtime.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_ttl_hours == 0 || self.jwt_ttl_hours > MAX_JWT_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.jwt_ttl_hours must be between 1 and {MAX_JWT_TTL_HOURS}, got {}",
                self.jwt_ttl_hours
            )));
        }
        Ok(())
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_ttl() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "jwt".to_string()
}

fn default_password_min() -> usize {
    8
}

fn default_password_score() -> u8 {
    2
}
