//! Concert CRUD.

use std::sync::Arc;

use tracing::info;

use tgle_core::error::AppError;
use tgle_core::types::ConcertId;
use tgle_core::types::pagination::{PageRequest, PageResponse};
use tgle_database::repositories::ConcertRepository;
use tgle_entity::concert::{Concert, CreateConcert};

use crate::context::RequestContext;

/// Creates, lists, and removes concert listings.
#[derive(Debug, Clone)]
pub struct ConcertService {
    concerts: Arc<dyn ConcertRepository>,
}

impl ConcertService {
    /// Creates a new concert service.
    pub fn new(concerts: Arc<dyn ConcertRepository>) -> Self {
        Self { concerts }
    }

    /// Stores a new concert.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateConcert,
    ) -> Result<Concert, AppError> {
        let concert = self.concerts.create(&data).await?;
        info!(
            concert_id = %concert.concert_id,
            created_by = %ctx.user_id,
            "Concert created"
        );
        Ok(concert)
    }

    /// Lists concerts, newest first.
    pub async fn list(
        &self,
        category_id: Option<i64>,
        page: &PageRequest,
    ) -> Result<PageResponse<Concert>, AppError> {
        self.concerts.find_all(category_id, page).await
    }

    /// Gets one concert.
    pub async fn get(&self, id: ConcertId) -> Result<Concert, AppError> {
        self.concerts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Concert {id} not found")))
    }

    /// Deletes one concert.
    pub async fn delete(&self, ctx: &RequestContext, id: ConcertId) -> Result<(), AppError> {
        if !self.concerts.delete(id).await? {
            return Err(AppError::not_found(format!("Concert {id} not found")));
        }
        info!(concert_id = %id, deleted_by = %ctx.user_id, "Concert deleted");
        Ok(())
    }
}
