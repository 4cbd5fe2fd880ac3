//! # tgle-database
//!
//! Connection management and repository implementations for all TGLE
//! entities. Each repository is a trait with a PostgreSQL implementation
//! and an in-memory implementation; [`Repositories`] picks one set based on
//! the configured provider.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod registry;
pub mod repositories;

pub use connection::DatabasePool;
pub use registry::Repositories;
