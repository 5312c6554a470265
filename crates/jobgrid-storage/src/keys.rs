//! Storage key grammar shared by all backends.
//!
//! Key format: `storage:<folder>:<object id>`, e.g.
//! `storage:resumes:550e8400-e29b-41d4-a716-446655440000-resume.pdf`.
//! The object path inside a backend is `<folder>/<object id>`.

use crate::traits::{StorageError, StorageResult};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

const KEY_PREFIX: &str = "storage:";

/// The folders uploads may land in. Each profile has at most one object per
/// folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadFolder {
    Resumes,
    CoverLetters,
    ProfileImages,
}

impl UploadFolder {
    pub const ALL: [UploadFolder; 3] = [
        UploadFolder::Resumes,
        UploadFolder::CoverLetters,
        UploadFolder::ProfileImages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFolder::Resumes => "resumes",
            UploadFolder::CoverLetters => "cover-letters",
            UploadFolder::ProfileImages => "profile-images",
        }
    }

    /// Whether the folder holds documents (as opposed to images).
    pub fn is_document(&self) -> bool {
        matches!(self, UploadFolder::Resumes | UploadFolder::CoverLetters)
    }
}

impl Display for UploadFolder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadFolder {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resumes" => Ok(UploadFolder::Resumes),
            "cover-letters" => Ok(UploadFolder::CoverLetters),
            "profile-images" => Ok(UploadFolder::ProfileImages),
            other => Err(StorageError::InvalidKey(format!(
                "Unknown upload folder: {}",
                other
            ))),
        }
    }
}

/// Build the canonical storage key for an object.
pub fn storage_key(folder: UploadFolder, object_id: &str) -> String {
    format!("{}{}:{}", KEY_PREFIX, folder.as_str(), object_id)
}

/// Parse a storage key back into its folder and object id.
///
/// The object id is everything after the second colon, so ids themselves may
/// contain colons (sanitized ids never do, but parsing stays total).
pub fn parse_storage_key(key: &str) -> StorageResult<(UploadFolder, &str)> {
    let rest = key.strip_prefix(KEY_PREFIX).ok_or_else(|| {
        StorageError::InvalidKey(format!("Key does not start with '{}': {}", KEY_PREFIX, key))
    })?;
    let (folder, object_id) = rest
        .split_once(':')
        .ok_or_else(|| StorageError::InvalidKey(format!("Key is missing an object id: {}", key)))?;
    if object_id.is_empty() {
        return Err(StorageError::InvalidKey(format!(
            "Key has an empty object id: {}",
            key
        )));
    }
    Ok((folder.parse()?, object_id))
}

/// Object path inside a backend (filesystem path component or S3 key).
pub fn object_path(folder: UploadFolder, object_id: &str) -> String {
    format!("{}/{}", folder.as_str(), object_id)
}

/// Reduce an uploaded file name to characters that are safe in keys, URLs,
/// and filesystem paths. Everything outside `[A-Za-z0-9._-]` becomes `-`,
/// and the result is capped at 120 characters.
pub fn sanitize_object_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = sanitized.trim_matches(|c| c == '-' || c == '.');
    let capped: String = trimmed.chars().take(120).collect();
    if capped.is_empty() {
        "upload".to_string()
    } else {
        capped
    }
}
