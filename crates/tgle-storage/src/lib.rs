//! # tgle-storage
//!
//! Object storage for uploaded images. Supports the local filesystem and
//! S3-compatible object stores; [`StorageManager`] wraps the configured
//! provider and owns key generation and image validation.

pub mod manager;
pub mod providers;

pub use manager::{StorageManager, StoredObject};
