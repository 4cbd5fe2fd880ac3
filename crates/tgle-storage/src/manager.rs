//! Storage manager: the configured provider plus upload policy.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use tgle_core::config::StorageConfig;
use tgle_core::error::AppError;
use tgle_core::result::AppResult;
use tgle_core::traits::storage::StorageProvider;

/// Location of an uploaded object.
#[derive(Debug, Clone, Serialize)]
pub struct StoredObject {
    /// Object key within the provider.
    pub key: String,
    /// Public URL of the object.
    pub url: String,
}

/// Wraps the configured [`StorageProvider`].
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
    max_upload_size: u64,
}

impl StorageManager {
    /// Build the provider named by `config.provider` (`local` or `s3`).
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn StorageProvider> = match config.provider.as_str() {
            #[cfg(feature = "local")]
            "local" => {
                info!(root = %config.local.root_path, "Initializing local storage provider");
                Arc::new(
                    crate::providers::LocalStorageProvider::new(
                        &config.local.root_path,
                        &config.local.public_base_url,
                    )
                    .await?,
                )
            }
            #[cfg(feature = "s3")]
            "s3" => Arc::new(crate::providers::S3StorageProvider::new(&config.s3).await?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'. Supported: local, s3"
                )));
            }
        };

        Ok(Self::new(provider, config.max_upload_size_bytes))
    }

    /// Wrap an existing provider.
    pub fn new(provider: Arc<dyn StorageProvider>, max_upload_size: u64) -> Self {
        Self {
            provider,
            max_upload_size,
        }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &dyn StorageProvider {
        self.provider.as_ref()
    }

    /// Validate and store an image under `folder`.
    ///
    /// The declared content type must be `image/*` and the bytes must be a
    /// recognizable image. The key is `<folder>/<millis>_<uuid>.<ext>` with the
    /// extension taken from the sniffed format.
    pub async fn upload_image(
        &self,
        folder: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> AppResult<StoredObject> {
        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if data.len() as u64 > self.max_upload_size {
            return Err(AppError::validation(format!(
                "Uploaded file exceeds the {} byte limit",
                self.max_upload_size
            )));
        }
        if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
            return Err(AppError::validation("Only image files can be uploaded"));
        }

        let format = image::guess_format(&data)
            .map_err(|_| AppError::validation("Uploaded file is not a recognized image"))?;
        let ext = format.extensions_str().first().copied().unwrap_or("img");

        let key = format!(
            "{}/{}_{}.{ext}",
            folder.trim_matches('/'),
            Utc::now().timestamp_millis(),
            Uuid::new_v4()
        );

        self.provider
            .write(&key, data, Some(format.to_mime_type()))
            .await?;

        let url = self.provider.public_url(&key);
        info!(key = %key, "Stored uploaded image");
        Ok(StoredObject { key, url })
    }

    /// Delete an object previously returned by [`StorageManager::upload_image`].
    ///
    /// Returns `false` when the URL does not belong to this provider.
    pub async fn delete_by_url(&self, url: &str) -> AppResult<bool> {
        let Some(key) = self.provider.path_from_url(url) else {
            warn!(url, "URL is not managed by the configured storage provider");
            return Ok(false);
        };
        self.provider.delete(&key).await?;
        Ok(true)
    }

    /// Check the provider.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }
}
