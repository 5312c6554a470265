//! Storage backends for user uploads.
//!
//! Every upload lives in one of three folders (resumes, cover letters,
//! profile images) and is addressed by an opaque storage key of the form
//! `storage:<folder>:<object id>`. The key is what gets persisted on the
//! profile; backends translate it to a filesystem path or S3 object key.

pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use keys::{object_path, parse_storage_key, sanitize_object_name, storage_key, UploadFolder};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Which backend a `Storage` implementation writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::Local => write!(f, "local"),
            StorageBackend::S3 => write!(f, "s3"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(StorageBackend::Local),
            "s3" => Ok(StorageBackend::S3),
            other => Err(StorageError::ConfigError(format!(
                "Unknown storage backend: {}",
                other
            ))),
        }
    }
}
