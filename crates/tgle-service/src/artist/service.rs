//! Artist CRUD and the liked-artists view.

use std::sync::Arc;

use tracing::info;

use tgle_core::error::AppError;
use tgle_core::types::ArtistId;
use tgle_core::types::pagination::{PageRequest, PageResponse};
use tgle_database::repositories::ArtistRepository;
use tgle_entity::artist::{ArtistWithLikes, CreateArtist};

use crate::context::RequestContext;

/// Creates and reads artists.
#[derive(Debug, Clone)]
pub struct ArtistService {
    artists: Arc<dyn ArtistRepository>,
}

impl ArtistService {
    /// Creates a new artist service.
    pub fn new(artists: Arc<dyn ArtistRepository>) -> Self {
        Self { artists }
    }

    /// Stores a new artist. A fresh artist has no likes.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateArtist,
    ) -> Result<ArtistWithLikes, AppError> {
        let artist = self.artists.create(&data).await?;
        info!(artist_id = %artist.artist_id, created_by = %ctx.user_id, "Artist created");
        Ok(ArtistWithLikes {
            artist,
            like_count: 0,
        })
    }

    /// Lists artists.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<ArtistWithLikes>, AppError> {
        self.artists.find_all(page).await
    }

    /// Gets one artist.
    pub async fn get(&self, id: ArtistId) -> Result<ArtistWithLikes, AppError> {
        self.artists
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Artist {id} not found")))
    }

    /// Artists the current user likes.
    pub async fn liked_by(&self, ctx: &RequestContext) -> Result<Vec<ArtistWithLikes>, AppError> {
        self.artists.find_liked_by(ctx.user_id).await
    }
}
