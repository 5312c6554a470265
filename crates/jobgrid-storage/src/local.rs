use crate::keys::{object_path, parse_storage_key, storage_key, UploadFolder};
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use jobgrid_core::models::UploadResult;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "./data/uploads")
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:4000/files")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert a storage key to a filesystem path with security validation
    ///
    /// The object path derived from the key must not contain traversal
    /// sequences that could escape the base storage directory.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        let (folder, object_id) = parse_storage_key(storage_key)?;
        if object_id.contains("..") || object_id.contains('/') || object_id.contains('\\') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(folder.as_str()).join(object_id))
    }

    /// Generate public URL for an object path
    fn generate_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(
        &self,
        folder: UploadFolder,
        object_id: &str,
        file_name: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, UploadResult)> {
        let key = storage_key(folder, object_id);
        let path = self.key_to_path(&key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let object_path = object_path(folder, object_id);
        let url = self.generate_url(&object_path);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok((
            key,
            UploadResult {
                url,
                path: object_path,
                file_name: file_name.to_string(),
            },
        ))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(storage_key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(storage_key.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            key = %storage_key,
            size_bytes = data.len(),
            "Local storage download successful"
        );

        Ok(data)
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let path = self.key_to_path(storage_key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(storage_key.to_string()));
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(key = %storage_key, "Local storage delete successful");

        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(storage_key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn get_presigned_url(
        &self,
        storage_key: &str,
        _expires_in: Duration,
    ) -> StorageResult<String> {
        // Local files are served by the API itself; there is nothing to sign.
        let (folder, object_id) = parse_storage_key(storage_key)?;
        Ok(self.generate_url(&crate::keys::object_path(folder, object_id)))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "http://localhost:4000/files".to_string())
            .await
            .unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn upload_then_download_round_trip() {
        let (_dir, storage) = storage().await;

        let (key, result) = storage
            .upload(
                UploadFolder::Resumes,
                "abc-resume.pdf",
                "resume.pdf",
                "application/pdf",
                b"pdf bytes".to_vec(),
            )
            .await
            .unwrap();

        assert_eq!(key, "storage:resumes:abc-resume.pdf");
        assert_eq!(result.path, "resumes/abc-resume.pdf");
        assert_eq!(result.file_name, "resume.pdf");
        assert_eq!(
            result.url,
            "http://localhost:4000/files/resumes/abc-resume.pdf"
        );

        let data = storage.download(&key).await.unwrap();
        assert_eq!(data, b"pdf bytes");
        assert!(storage.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_the_object() {
        let (_dir, storage) = storage().await;

        let (key, _) = storage
            .upload(
                UploadFolder::ProfileImages,
                "avatar.png",
                "avatar.png",
                "image/png",
                vec![1, 2, 3],
            )
            .await
            .unwrap();

        storage.delete(&key).await.unwrap();
        assert!(!storage.exists(&key).await.unwrap());
        assert!(matches!(
            storage.download(&key).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn download_missing_object_is_not_found() {
        let (_dir, storage) = storage().await;
        let err = storage
            .download("storage:resumes:missing.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let (_dir, storage) = storage().await;
        for key in [
            "storage:resumes:../../etc/passwd",
            "storage:resumes:a/b",
            "storage:resumes:a\\b",
        ] {
            assert!(matches!(
                storage.download(key).await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[tokio::test]
    async fn presigned_url_is_the_public_url() {
        let (_dir, storage) = storage().await;
        let (key, result) = storage
            .upload(
                UploadFolder::CoverLetters,
                "cl.pdf",
                "cl.pdf",
                "application/pdf",
                vec![0],
            )
            .await
            .unwrap();
        let url = storage
            .get_presigned_url(&key, Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(url, result.url);
    }
}
