//! Artist entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tgle_core::types::ArtistId;

/// A performer that users can follow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique artist identifier.
    pub artist_id: ArtistId,
    /// Display name.
    pub artist_name: String,
    /// Image URL.
    pub artist_img: Option<String>,
    /// Free-form description.
    pub artist_info: Option<String>,
    /// Genre/category reference.
    pub category_id: Option<i64>,
    /// When the artist was created.
    pub created_at: DateTime<Utc>,
}

/// An artist together with its current number of likes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtistWithLikes {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub artist: Artist,
    /// Number of users whose like is active.
    pub like_count: i64,
}

/// Data required to create a new artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    pub artist_name: String,
    pub artist_img: Option<String>,
    pub artist_info: Option<String>,
    pub category_id: Option<i64>,
}
