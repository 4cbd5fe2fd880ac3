//! Storage provider trait for pluggable object storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for object storage backends.
///
/// Implementations exist for the local filesystem and S3 compatible
/// services. Paths are `/`-separated object keys relative to the provider
/// root, e.g. `users/1718000000000_<uuid>.png`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to the given path, replacing any existing object.
    async fn write(&self, path: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()>;

    /// Delete the object at the given path. Missing objects are not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether an object exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Public URL under which the object at `path` is served.
    fn public_url(&self, path: &str) -> String;

    /// Inverse of [`StorageProvider::public_url`]: the object key for a URL
    /// issued by this provider, or `None` if the URL belongs elsewhere.
    fn path_from_url(&self, url: &str) -> Option<String>;
}
