//! Custom Axum extractors.

pub mod auth;
pub mod pagination;
pub mod path;
pub mod validated;

pub use auth::{AuthUser, extract_token};
pub use pagination::{ConcertListParams, PaginationParams};
pub use validated::ValidatedJson;
