//! In-memory artist like repository.

use async_trait::async_trait;
use chrono::Utc;

use tgle_core::AppError;
use tgle_core::result::AppResult;
use tgle_core::types::{ArtistId, ArtistLikeId, UserId};
use tgle_entity::artist_like::ArtistLike;

use super::MemoryStore;
use crate::repositories::ArtistLikeRepository;

/// [`ArtistLikeRepository`] backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryArtistLikeRepository {
    store: MemoryStore,
}

impl MemoryArtistLikeRepository {
    /// Create a repository over the given store.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArtistLikeRepository for MemoryArtistLikeRepository {
    async fn find(&self, user_id: UserId, artist_id: ArtistId) -> AppResult<Option<ArtistLike>> {
        let tables = self.store.read().await;
        Ok(tables
            .artist_likes
            .iter()
            .find(|l| l.user_id == user_id && l.artist_id == artist_id)
            .cloned())
    }

    async fn toggle(&self, user_id: UserId, artist_id: ArtistId) -> AppResult<ArtistLike> {
        let mut tables = self.store.write().await;

        if !tables.artists.contains_key(&artist_id) {
            return Err(AppError::not_found(format!("Artist {artist_id} not found")));
        }

        if let Some(like) = tables
            .artist_likes
            .iter_mut()
            .find(|l| l.user_id == user_id && l.artist_id == artist_id)
        {
            like.is_like = !like.is_like;
            return Ok(like.clone());
        }

        let like = ArtistLike {
            artist_like_id: ArtistLikeId(tables.next_id()),
            user_id,
            artist_id,
            created_at: Utc::now(),
            is_like: true,
        };
        tables.artist_likes.push(like.clone());
        Ok(like)
    }

    async fn count_for_artist(&self, artist_id: ArtistId) -> AppResult<i64> {
        Ok(self.store.read().await.like_count(artist_id))
    }
}
