//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tgle_auth::Claims;
use tgle_core::AppError;
use tgle_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built from verified JWT claims and passed into service methods so that
/// every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Email from the token.
    pub email: String,
    /// Nickname at the time the token was issued.
    pub nickname: String,
    /// Token ID.
    pub token_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Builds a context from verified claims.
    pub fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email.clone(),
            nickname: claims.nickname.clone(),
            token_id: claims.jti,
            request_time: Utc::now(),
        })
    }
}
