//! Artist repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tgle_core::error::{AppError, ErrorKind};
use tgle_core::result::AppResult;
use tgle_core::types::pagination::{PageRequest, PageResponse};
use tgle_core::types::{ArtistId, UserId};
use tgle_entity::artist::{Artist, ArtistWithLikes, CreateArtist};

/// Persistence operations for artists.
///
/// Reads return [`ArtistWithLikes`] so callers always see the current count
/// of active likes.
#[async_trait]
pub trait ArtistRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new artist.
    async fn create(&self, data: &CreateArtist) -> AppResult<Artist>;

    /// Find an artist by primary key.
    async fn find_by_id(&self, id: ArtistId) -> AppResult<Option<ArtistWithLikes>>;

    /// List artists in creation order.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<ArtistWithLikes>>;

    /// Artists the user currently likes.
    async fn find_liked_by(&self, user_id: UserId) -> AppResult<Vec<ArtistWithLikes>>;
}

/// PostgreSQL-backed [`ArtistRepository`].
#[derive(Debug, Clone)]
pub struct PgArtistRepository {
    pool: PgPool,
}

impl PgArtistRepository {
    /// Create a new artist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_WITH_LIKES: &str = "SELECT a.*, \
     (SELECT COUNT(*) FROM artist_likes l WHERE l.artist_id = a.artist_id AND l.is_like) AS like_count \
     FROM artists a";

#[async_trait]
impl ArtistRepository for PgArtistRepository {
    async fn create(&self, data: &CreateArtist) -> AppResult<Artist> {
        sqlx::query_as::<_, Artist>(
            "INSERT INTO artists (artist_name, artist_img, artist_info, category_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.artist_name)
        .bind(&data.artist_img)
        .bind(&data.artist_info)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create artist", e))
    }

    async fn find_by_id(&self, id: ArtistId) -> AppResult<Option<ArtistWithLikes>> {
        sqlx::query_as::<_, ArtistWithLikes>(&format!("{SELECT_WITH_LIKES} WHERE a.artist_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find artist", e))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<ArtistWithLikes>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count artists", e))?;

        let artists = sqlx::query_as::<_, ArtistWithLikes>(&format!(
            "{SELECT_WITH_LIKES} ORDER BY a.artist_id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list artists", e))?;

        Ok(PageResponse::new(
            artists,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn find_liked_by(&self, user_id: UserId) -> AppResult<Vec<ArtistWithLikes>> {
        sqlx::query_as::<_, ArtistWithLikes>(&format!(
            "{SELECT_WITH_LIKES} WHERE EXISTS (SELECT 1 FROM artist_likes m \
             WHERE m.artist_id = a.artist_id AND m.user_id = $1 AND m.is_like) \
             ORDER BY a.artist_id ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list liked artists", e)
        })
    }
}
