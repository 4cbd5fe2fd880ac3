//! Artist like entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tgle_core::types::{ArtistId, ArtistLikeId, UserId};

/// One user's like state for one artist.
///
/// Rows are never deleted; un-liking flips `is_like` to `false`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtistLike {
    /// Unique row identifier.
    pub artist_like_id: ArtistLikeId,
    /// The liking user.
    pub user_id: UserId,
    /// The liked artist.
    pub artist_id: ArtistId,
    /// When the row was first created.
    pub created_at: DateTime<Utc>,
    /// Whether the like is currently active.
    pub is_like: bool,
}
