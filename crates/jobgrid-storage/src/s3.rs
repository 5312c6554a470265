use crate::keys::{object_path, parse_storage_key, storage_key, UploadFolder};
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use jobgrid_core::models::UploadResult;
use std::time::Duration;

/// S3 (or S3-compatible) storage implementation.
#[derive(Clone)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    /// Optional CDN/static host fronting the bucket. When unset, plain
    /// bucket URLs are returned and clients are expected to use presigned
    /// URLs for private objects.
    public_base_url: Option<String>,
}

impl S3Storage {
    /// Create a new S3Storage instance.
    ///
    /// Credentials are resolved through the standard AWS provider chain.
    /// `endpoint` supports S3-compatible services such as MinIO.
    pub async fn new(
        bucket: String,
        region: Option<String>,
        endpoint: Option<String>,
        public_base_url: Option<String>,
    ) -> StorageResult<Self> {
        if bucket.is_empty() {
            return Err(StorageError::ConfigError(
                "S3 bucket name is required for the s3 backend".to_string(),
            ));
        }

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        if let Some(endpoint) = endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Ok(S3Storage {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket,
            public_base_url,
        })
    }

    fn generate_url(&self, path: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path),
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket, path),
        }
    }

    fn key_to_object_path(storage_key: &str) -> StorageResult<String> {
        let (folder, object_id) = parse_storage_key(storage_key)?;
        Ok(object_path(folder, object_id))
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn upload(
        &self,
        folder: UploadFolder,
        object_id: &str,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, UploadResult)> {
        let key = storage_key(folder, object_id);
        let path = object_path(folder, object_id);
        let size = data.len();

        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&path)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!("Failed to put object {}: {}", path, e))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok((
            key,
            UploadResult {
                url: self.generate_url(&path),
                path,
                file_name: file_name.to_string(),
            },
        ))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        let path = Self::key_to_object_path(storage_key)?;

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&path)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    StorageError::NotFound(storage_key.to_string())
                } else {
                    StorageError::DownloadFailed(format!(
                        "Failed to get object {}: {}",
                        path, service_error
                    ))
                }
            })?;

        let data = response.body.collect().await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read object body {}: {}", path, e))
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let path = Self::key_to_object_path(storage_key)?;

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&path)
            .send()
            .await
            .map_err(|e| {
                StorageError::DeleteFailed(format!("Failed to delete object {}: {}", path, e))
            })?;

        tracing::info!(bucket = %self.bucket, key = %storage_key, "S3 delete successful");

        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        let path = Self::key_to_object_path(storage_key)?;

        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(&path)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::BackendError(format!(
                        "Failed to head object {}: {}",
                        path, service_error
                    )))
                }
            }
        }
    }

    async fn get_presigned_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let path = Self::key_to_object_path(storage_key)?;

        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::BackendError(format!("Invalid presign expiry: {}", e)))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&path)
            .presigned(presigning)
            .await
            .map_err(|e| {
                StorageError::BackendError(format!("Failed to presign {}: {}", path, e))
            })?;

        Ok(request.uri().to_string())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
