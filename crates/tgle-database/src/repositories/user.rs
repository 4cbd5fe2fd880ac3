//! User repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tgle_core::error::{AppError, ErrorKind};
use tgle_core::result::AppResult;
use tgle_core::types::UserId;
use tgle_entity::user::{AuthProvider, CreateUser, User};

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by nickname.
    async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<User>>;

    /// Find a social account by provider and provider-side id.
    async fn find_by_sns(&self, provider: AuthProvider, sns_id: &str) -> AppResult<Option<User>>;

    /// Insert a new user. Duplicate email, nickname or social id yields a conflict.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Change a user's nickname.
    async fn update_nickname(&self, id: UserId, nickname: &str) -> AppResult<User>;

    /// Replace a user's password hash.
    async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<User>;

    /// Replace a user's profile image URL.
    async fn update_profile_img(&self, id: UserId, profile_img: Option<&str>) -> AppResult<User>;
}

/// PostgreSQL-backed [`UserRepository`].
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map unique-constraint violations on `users` to conflict errors.
fn map_write_error(e: sqlx::Error, email: Option<&str>, nickname: Option<&str>) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
            AppError::conflict(format!(
                "Email '{}' is already registered",
                email.unwrap_or_default()
            ))
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_nickname_key") => {
            AppError::conflict(format!(
                "Nickname '{}' is already taken",
                nickname.unwrap_or_default()
            ))
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("users_provider_sns_id_key") =>
        {
            AppError::conflict("This social account is already linked")
        }
        sqlx::Error::RowNotFound => AppError::not_found("User not found"),
        _ => AppError::with_source(ErrorKind::Database, "Failed to write user", e),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE nickname = $1")
            .bind(nickname)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by nickname", e)
            })
    }

    async fn find_by_sns(&self, provider: AuthProvider, sns_id: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE provider = $1 AND sns_id = $2")
            .bind(provider)
            .bind(sns_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find social user", e)
            })
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, nickname, password_hash, profile_img, provider, sns_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.nickname)
        .bind(&data.password_hash)
        .bind(&data.profile_img)
        .bind(data.provider)
        .bind(&data.sns_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Some(&data.email), Some(&data.nickname)))
    }

    async fn update_nickname(&self, id: UserId, nickname: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET nickname = $2, updated_at = NOW() WHERE user_id = $1 RETURNING *",
        )
        .bind(id)
        .bind(nickname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, None, Some(nickname)))
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET password_hash = $2, updated_at = NOW() WHERE user_id = $1 RETURNING *",
        )
        .bind(id)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, None, None))
    }

    async fn update_profile_img(&self, id: UserId, profile_img: Option<&str>) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET profile_img = $2, updated_at = NOW() WHERE user_id = $1 RETURNING *",
        )
        .bind(id)
        .bind(profile_img)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, None, None))
    }
}
