//! # tgle-api
//!
//! HTTP API layer for TGLE built on Axum.
//!
//! Provides the REST endpoints for users, concerts, artists, and health,
//! plus middleware (CORS, logging), extractors, DTOs, and the router.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
