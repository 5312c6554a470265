//! Storage setup and initialization

use anyhow::Result;
use jobgrid_core::Config;
use jobgrid_storage::{LocalStorage, S3Storage, Storage, StorageBackend};
use std::str::FromStr;
use std::sync::Arc;

/// Setup the storage backend named by STORAGE_BACKEND.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(backend = %config.storage_backend(), "Initializing storage...");

    let backend = StorageBackend::from_str(config.storage_backend()).map_err(|_| {
        anyhow::anyhow!(
            "Unknown storage backend '{}' (expected 'local' or 's3')",
            config.storage_backend()
        )
    })?;

    let storage: Arc<dyn Storage> = match backend {
        StorageBackend::Local => Arc::new(
            LocalStorage::new(
                config.local_storage_path(),
                config.local_storage_base_url().to_string(),
            )
            .await?,
        ),
        StorageBackend::S3 => {
            let bucket = config.s3_bucket();
            if bucket.is_empty() {
                return Err(anyhow::anyhow!(
                    "S3_BUCKET must be set when using the s3 storage backend"
                ));
            }
            Arc::new(
                S3Storage::new(
                    bucket.to_string(),
                    config.s3_region().map(String::from),
                    config.s3_endpoint().map(String::from),
                    config.s3_public_base_url().map(String::from),
                )
                .await?,
            )
        }
    };

    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage initialized successfully"
    );

    Ok(storage)
}
