//! Artist domain entities.

pub mod model;

pub use model::{Artist, ArtistWithLikes, CreateArtist};
