//! Artist like repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tgle_core::error::{AppError, ErrorKind};
use tgle_core::result::AppResult;
use tgle_core::types::{ArtistId, UserId};
use tgle_entity::artist_like::ArtistLike;

/// Persistence operations for artist likes.
#[async_trait]
pub trait ArtistLikeRepository: Send + Sync + std::fmt::Debug + 'static {
    /// The like row for a user/artist pair, if one was ever created.
    async fn find(&self, user_id: UserId, artist_id: ArtistId) -> AppResult<Option<ArtistLike>>;

    /// Create the row with `is_like = true`, or flip `is_like` if it exists.
    async fn toggle(&self, user_id: UserId, artist_id: ArtistId) -> AppResult<ArtistLike>;

    /// Number of active likes for an artist.
    async fn count_for_artist(&self, artist_id: ArtistId) -> AppResult<i64>;
}

/// PostgreSQL-backed [`ArtistLikeRepository`].
#[derive(Debug, Clone)]
pub struct PgArtistLikeRepository {
    pool: PgPool,
}

impl PgArtistLikeRepository {
    /// Create a new artist like repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistLikeRepository for PgArtistLikeRepository {
    async fn find(&self, user_id: UserId, artist_id: ArtistId) -> AppResult<Option<ArtistLike>> {
        sqlx::query_as::<_, ArtistLike>(
            "SELECT * FROM artist_likes WHERE user_id = $1 AND artist_id = $2",
        )
        .bind(user_id)
        .bind(artist_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find artist like", e))
    }

    async fn toggle(&self, user_id: UserId, artist_id: ArtistId) -> AppResult<ArtistLike> {
        sqlx::query_as::<_, ArtistLike>(
            "INSERT INTO artist_likes (user_id, artist_id, is_like) VALUES ($1, $2, TRUE) \
             ON CONFLICT ON CONSTRAINT artist_likes_user_artist_key \
             DO UPDATE SET is_like = NOT artist_likes.is_like \
             RETURNING *",
        )
        .bind(user_id)
        .bind(artist_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Artist {artist_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to toggle artist like", e),
        })
    }

    async fn count_for_artist(&self, artist_id: ArtistId) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artist_likes WHERE artist_id = $1 AND is_like")
            .bind(artist_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count likes", e))
    }
}
