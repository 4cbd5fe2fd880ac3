//! In-memory repository implementations.
//!
//! All repositories share one [`MemoryStore`] so that cross-table reads
//! (like counts, liked artists) see a consistent view. Uniqueness rules
//! mirror the PostgreSQL schema constraints.

pub mod artist;
pub mod artist_like;
pub mod concert;
pub mod user;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use tgle_core::types::{ArtistId, ConcertId, UserId};
use tgle_entity::artist::{Artist, ArtistWithLikes};
use tgle_entity::artist_like::ArtistLike;
use tgle_entity::concert::Concert;
use tgle_entity::user::User;

pub use artist::MemoryArtistRepository;
pub use artist_like::MemoryArtistLikeRepository;
pub use concert::MemoryConcertRepository;
pub use user::MemoryUserRepository;

/// Table contents guarded by a single lock.
#[derive(Debug, Default)]
pub struct Tables {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) artists: BTreeMap<ArtistId, Artist>,
    pub(crate) concerts: BTreeMap<ConcertId, Concert>,
    pub(crate) artist_likes: Vec<ArtistLike>,
    sequence: i64,
}

impl Tables {
    /// Next value of the shared id sequence.
    pub(crate) fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    /// Active like count for an artist.
    pub(crate) fn like_count(&self, artist_id: ArtistId) -> i64 {
        self.artist_likes
            .iter()
            .filter(|l| l.artist_id == artist_id && l.is_like)
            .count() as i64
    }

    pub(crate) fn with_likes(&self, artist: &Artist) -> ArtistWithLikes {
        ArtistWithLikes {
            artist: artist.clone(),
            like_count: self.like_count(artist.artist_id),
        }
    }
}

/// Shared in-memory database.
pub type MemoryStore = Arc<RwLock<Tables>>;

/// Create an empty in-memory database.
pub fn new_store() -> MemoryStore {
    Arc::new(RwLock::new(Tables::default()))
}
