//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tgle_core::types::UserId;

use super::provider::AuthProvider;

/// A registered user, either local (email + password) or social.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub user_id: UserId,
    /// Unique email address.
    pub email: String,
    /// Unique display name.
    pub nickname: String,
    /// Argon2 password hash. Absent for social accounts.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    /// Public URL of the profile image.
    pub profile_img: Option<String>,
    /// How the account signs in.
    pub provider: AuthProvider,
    /// Account id at the social provider.
    pub sns_id: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub nickname: String,
    /// Pre-hashed password, `None` for social accounts.
    pub password_hash: Option<String>,
    /// Initial profile image URL.
    pub profile_img: Option<String>,
    /// Sign-in provider.
    pub provider: AuthProvider,
    /// Account id at the social provider.
    pub sns_id: Option<String>,
}

impl CreateUser {
    /// Input for a local email/password account.
    pub fn local(email: impl Into<String>, nickname: impl Into<String>, password_hash: String) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
            password_hash: Some(password_hash),
            profile_img: None,
            provider: AuthProvider::Local,
            sns_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let now = Utc::now();
        let user = User {
            user_id: UserId(1),
            email: "fan@tgle.ml".into(),
            nickname: "fan".into(),
            password_hash: Some("$argon2id$secret".into()),
            profile_img: None,
            provider: AuthProvider::Local,
            sns_id: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&user).expect("serialize");
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["userId"], 1);
        assert_eq!(json["provider"], "local");
    }
}
