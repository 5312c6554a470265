//! The `Storage` trait implemented by every storage backend.

use crate::keys::UploadFolder;
use crate::StorageBackend;
use async_trait::async_trait;
use jobgrid_core::models::UploadResult;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Common interface over the local filesystem and S3 backends.
///
/// Upload handlers and the profile repository only ever see this trait, so a
/// deployment can switch backends through configuration alone.
///
/// **Key format:** `storage:<folder>:<object id>`. See the crate root
/// documentation and [`crate::keys`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload a file and return its storage key together with the client-facing
    /// [`UploadResult`].
    ///
    /// The storage key is the internal identifier persisted on the profile;
    /// the `UploadResult` is what API clients receive.
    async fn upload(
        &self,
        folder: UploadFolder,
        object_id: &str,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, UploadResult)>;

    /// Download a file by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Delete a file by its storage key
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Generate a presigned/temporary URL for direct access (GET)
    ///
    /// This is useful for giving clients temporary access to files
    /// without going through the application server. Backends without
    /// signing support return their public URL instead.
    async fn get_presigned_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
