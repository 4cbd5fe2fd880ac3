//! Core type definitions used across the TGLE workspace.

pub mod id;
pub mod pagination;
pub mod response;

pub use id::*;
pub use pagination::{PageRequest, PageResponse};
pub use response::ApiErrorResponse;
