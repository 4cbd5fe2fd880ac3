//! Artist like entities.

pub mod model;

pub use model::ArtistLike;
