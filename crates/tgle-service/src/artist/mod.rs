//! Artists and artist likes.

pub mod like;
pub mod service;

pub use like::{ArtistLikeService, LikeStatus};
pub use service::ArtistService;
