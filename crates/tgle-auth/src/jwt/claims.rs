//! JWT claims structure.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tgle_core::AppError;
use tgle_core::types::UserId;

/// JWT claims payload embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID as a decimal string.
    pub sub: String,
    /// Email at the time of issuance.
    pub email: String,
    /// Nickname at the time of issuance.
    pub nickname: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token ID, used for revocation.
    pub jti: Uuid,
}

impl Claims {
    /// The user ID from the subject claim.
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid token subject"))
    }

    /// Remaining lifetime in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
