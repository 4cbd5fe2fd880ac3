//! S3-compatible object storage provider.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use tgle_core::config::storage::S3StorageConfig;
use tgle_core::error::AppError;
use tgle_core::result::AppResult;
use tgle_core::traits::storage::StorageProvider;

use super::{join_url, strip_base};

/// S3-compatible storage provider.
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3StorageProvider {
    /// Create a new S3 storage provider from configuration.
    ///
    /// Static credentials are used when an access key is configured,
    /// otherwise the default AWS credential chain applies. A custom
    /// endpoint (MinIO and similar) switches to path-style addressing.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket must be set"));
        }

        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 storage provider"
        );

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if !config.access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "tgle-config",
            ));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            builder = builder
                .endpoint_url(config.endpoint.clone())
                .force_path_style(true);
        }

        let public_base_url = if config.public_base_url.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com",
                config.bucket, config.region
            )
        } else {
            config.public_base_url.clone()
        };

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url,
        })
    }
}

fn storage_error(action: &str, path: &str, e: impl std::error::Error) -> AppError {
    AppError::storage(format!(
        "S3 {action} failed for '{path}': {}",
        DisplayErrorContext(e)
    ))
}

#[async_trait]
impl StorageProvider for S3StorageProvider {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                debug!(bucket = %self.bucket, error = %DisplayErrorContext(&e), "S3 health check failed");
                Ok(false)
            }
        }
    }

    async fn write(&self, path: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()> {
        let len = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .set_content_type(content_type.map(str::to_string))
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| storage_error("put", path, e))?;

        debug!(path, bytes = len, "Uploaded object");
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| storage_error("delete", path, e))?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|s| s.is_not_found()) => Ok(false),
            Err(e) => Err(storage_error("head", path, e)),
        }
    }

    fn public_url(&self, path: &str) -> String {
        join_url(&self.public_base_url, path)
    }

    fn path_from_url(&self, url: &str) -> Option<String> {
        strip_base(&self.public_base_url, url)
    }
}
