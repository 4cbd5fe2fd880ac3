//! Artist like toggling.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use tgle_core::error::AppError;
use tgle_core::types::ArtistId;
use tgle_database::repositories::{ArtistLikeRepository, ArtistRepository};

use crate::context::RequestContext;

/// Like state after a toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub artist_id: ArtistId,
    pub is_like: bool,
    pub like_count: i64,
}

/// Toggles likes.
#[derive(Debug, Clone)]
pub struct ArtistLikeService {
    likes: Arc<dyn ArtistLikeRepository>,
    artists: Arc<dyn ArtistRepository>,
}

impl ArtistLikeService {
    /// Creates a new artist like service.
    pub fn new(likes: Arc<dyn ArtistLikeRepository>, artists: Arc<dyn ArtistRepository>) -> Self {
        Self { likes, artists }
    }

    /// The current user's like state for an artist. No row means not liked.
    pub async fn status(
        &self,
        ctx: &RequestContext,
        artist_id: ArtistId,
    ) -> Result<LikeStatus, AppError> {
        if self.artists.find_by_id(artist_id).await?.is_none() {
            return Err(AppError::not_found(format!("Artist {artist_id} not found")));
        }

        let like = self.likes.find(ctx.user_id, artist_id).await?;
        Ok(LikeStatus {
            artist_id,
            is_like: like.is_some_and(|l| l.is_like),
            like_count: self.likes.count_for_artist(artist_id).await?,
        })
    }

    /// Likes the artist on the first call, then flips the like on each call.
    pub async fn toggle(
        &self,
        ctx: &RequestContext,
        artist_id: ArtistId,
    ) -> Result<LikeStatus, AppError> {
        if self.artists.find_by_id(artist_id).await?.is_none() {
            return Err(AppError::not_found(format!("Artist {artist_id} not found")));
        }

        let like = self.likes.toggle(ctx.user_id, artist_id).await?;
        let like_count = self.likes.count_for_artist(artist_id).await?;

        info!(
            user_id = %ctx.user_id,
            artist_id = %artist_id,
            is_like = like.is_like,
            "Artist like toggled"
        );
        Ok(LikeStatus {
            artist_id,
            is_like: like.is_like,
            like_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use tgle_core::error::ErrorKind;
    use tgle_entity::artist::CreateArtist;

    use super::*;
    use crate::artist::ArtistService;
    use crate::testing::fixture;

    fn ctx(id: i64) -> RequestContext {
        RequestContext {
            user_id: tgle_core::types::UserId(id),
            email: format!("user{id}@tgle.ml"),
            nickname: format!("user{id}"),
            token_id: uuid::Uuid::new_v4(),
            request_time: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_toggle_and_liked_list() {
        let f = fixture().await;
        let artists = ArtistService::new(f.repos.artists.clone());
        let likes = ArtistLikeService::new(f.repos.artist_likes.clone(), f.repos.artists.clone());

        let artist = artists
            .create(
                &ctx(1),
                CreateArtist {
                    artist_name: "NewJeans".into(),
                    artist_img: None,
                    artist_info: None,
                    category_id: Some(1),
                },
            )
            .await
            .unwrap();
        let id = artist.artist.artist_id;

        assert!(!likes.status(&ctx(1), id).await.unwrap().is_like);

        let status = likes.toggle(&ctx(1), id).await.unwrap();
        assert!(status.is_like);
        assert_eq!(status.like_count, 1);
        assert!(likes.status(&ctx(1), id).await.unwrap().is_like);

        let status = likes.toggle(&ctx(2), id).await.unwrap();
        assert_eq!(status.like_count, 2);

        let status = likes.toggle(&ctx(1), id).await.unwrap();
        assert!(!status.is_like);
        assert_eq!(status.like_count, 1);

        assert!(artists.liked_by(&ctx(1)).await.unwrap().is_empty());
        assert_eq!(artists.liked_by(&ctx(2)).await.unwrap().len(), 1);
        assert_eq!(artists.get(id).await.unwrap().like_count, 1);
    }

    #[tokio::test]
    async fn test_toggle_missing_artist() {
        let f = fixture().await;
        let likes = ArtistLikeService::new(f.repos.artist_likes.clone(), f.repos.artists.clone());
        let err = likes.toggle(&ctx(1), ArtistId(404)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
