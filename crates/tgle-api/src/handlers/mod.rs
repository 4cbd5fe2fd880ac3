//! HTTP handlers grouped by resource.

pub mod artists;
pub mod concerts;
pub mod health;
pub mod users;
