//! # tgle-service
//!
//! Business logic service layer for TGLE. Each service orchestrates
//! repositories, storage, and authentication to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod artist;
pub mod auth;
pub mod concert;
pub mod context;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use artist::{ArtistLikeService, ArtistService, LikeStatus};
pub use auth::{AuthService, LoginOutcome, LoginResult, SocialLoginResult};
pub use concert::ConcertService;
pub use context::RequestContext;
pub use user::{RegisterUser, UpdateUserInfo, UserService};
