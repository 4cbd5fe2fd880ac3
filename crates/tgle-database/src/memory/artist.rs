//! In-memory artist repository.

use async_trait::async_trait;
use chrono::Utc;

use tgle_core::result::AppResult;
use tgle_core::types::pagination::{PageRequest, PageResponse};
use tgle_core::types::{ArtistId, UserId};
use tgle_entity::artist::{Artist, ArtistWithLikes, CreateArtist};

use super::MemoryStore;
use crate::repositories::ArtistRepository;

/// [`ArtistRepository`] backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryArtistRepository {
    store: MemoryStore,
}

impl MemoryArtistRepository {
    /// Create a repository over the given store.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArtistRepository for MemoryArtistRepository {
    async fn create(&self, data: &CreateArtist) -> AppResult<Artist> {
        let mut tables = self.store.write().await;
        let artist = Artist {
            artist_id: ArtistId(tables.next_id()),
            artist_name: data.artist_name.clone(),
            artist_img: data.artist_img.clone(),
            artist_info: data.artist_info.clone(),
            category_id: data.category_id,
            created_at: Utc::now(),
        };
        tables.artists.insert(artist.artist_id, artist.clone());
        Ok(artist)
    }

    async fn find_by_id(&self, id: ArtistId) -> AppResult<Option<ArtistWithLikes>> {
        let tables = self.store.read().await;
        Ok(tables.artists.get(&id).map(|a| tables.with_likes(a)))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<ArtistWithLikes>> {
        let tables = self.store.read().await;
        let total = tables.artists.len() as u64;
        let items = tables
            .artists
            .values()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .map(|a| tables.with_likes(a))
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn find_liked_by(&self, user_id: UserId) -> AppResult<Vec<ArtistWithLikes>> {
        let tables = self.store.read().await;
        Ok(tables
            .artists
            .values()
            .filter(|a| {
                tables
                    .artist_likes
                    .iter()
                    .any(|l| l.user_id == user_id && l.artist_id == a.artist_id && l.is_like)
            })
            .map(|a| tables.with_likes(a))
            .collect())
    }
}
