//! Core traits implemented by pluggable backends.

pub mod cache;
pub mod storage;

pub use cache::CacheProvider;
pub use storage::StorageProvider;
