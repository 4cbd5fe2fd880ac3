//! Concert repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tgle_core::error::{AppError, ErrorKind};
use tgle_core::result::AppResult;
use tgle_core::types::ConcertId;
use tgle_core::types::pagination::{PageRequest, PageResponse};
use tgle_entity::concert::{Concert, CreateConcert};

/// Persistence operations for concerts.
#[async_trait]
pub trait ConcertRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new concert.
    async fn create(&self, data: &CreateConcert) -> AppResult<Concert>;

    /// Find a concert by primary key.
    async fn find_by_id(&self, id: ConcertId) -> AppResult<Option<Concert>>;

    /// List concerts, newest concert date first, optionally by category.
    async fn find_all(
        &self,
        category_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Concert>>;

    /// Delete a concert. Returns `false` if it did not exist.
    async fn delete(&self, id: ConcertId) -> AppResult<bool>;
}

/// PostgreSQL-backed [`ConcertRepository`].
#[derive(Debug, Clone)]
pub struct PgConcertRepository {
    pool: PgPool,
}

impl PgConcertRepository {
    /// Create a new concert repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConcertRepository for PgConcertRepository {
    async fn create(&self, data: &CreateConcert) -> AppResult<Concert> {
        sqlx::query_as::<_, Concert>(
            "INSERT INTO concerts (category_id, concert_name, concert_img, concert_info, \
             concert_date, ticketing_date, ticketing_url, calender, play_time, location_name, ratings) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(data.category_id)
        .bind(&data.concert_name)
        .bind(&data.concert_img)
        .bind(&data.concert_info)
        .bind(&data.concert_date)
        .bind(&data.ticketing_date)
        .bind(&data.ticketing_url)
        .bind(&data.calender)
        .bind(&data.play_time)
        .bind(&data.location_name)
        .bind(&data.ratings)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create concert", e))
    }

    async fn find_by_id(&self, id: ConcertId) -> AppResult<Option<Concert>> {
        sqlx::query_as::<_, Concert>("SELECT * FROM concerts WHERE concert_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find concert", e))
    }

    async fn find_all(
        &self,
        category_id: Option<i64>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Concert>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM concerts WHERE ($1::BIGINT IS NULL OR category_id = $1)",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count concerts", e))?;

        let concerts = sqlx::query_as::<_, Concert>(
            "SELECT * FROM concerts WHERE ($1::BIGINT IS NULL OR category_id = $1) \
             ORDER BY concert_date DESC NULLS LAST, concert_id DESC LIMIT $2 OFFSET $3",
        )
        .bind(category_id)
        .bind(page.limit() as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list concerts", e))?;

        Ok(PageResponse::new(
            concerts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn delete(&self, id: ConcertId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM concerts WHERE concert_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete concert", e))?;
        Ok(result.rows_affected() > 0)
    }
}
