//! Repository traits and their PostgreSQL implementations.

pub mod artist;
pub mod artist_like;
pub mod concert;
pub mod user;

pub use artist::{ArtistRepository, PgArtistRepository};
pub use artist_like::{ArtistLikeRepository, PgArtistLikeRepository};
pub use concert::{ConcertRepository, PgConcertRepository};
pub use user::{PgUserRepository, UserRepository};
