//! Upload validation: size limits, extension and content-type allowlists.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileValidationError {
    #[error("File is empty")]
    Empty,

    #[error("File size {size} exceeds the maximum of {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("File name is missing or invalid")]
    InvalidFileName,

    #[error("File extension '{0}' is not allowed")]
    ExtensionNotAllowed(String),

    #[error("Content type '{0}' is not allowed")]
    ContentTypeNotAllowed(String),

    #[error("Content type '{content_type}' does not match file extension '{extension}'")]
    ContentTypeMismatch {
        content_type: String,
        extension: String,
    },
}

/// Limits and allowlists applied to one upload folder family.
#[derive(Debug, Clone)]
pub struct UploadRules {
    pub max_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

impl UploadRules {
    pub fn new(
        max_size_bytes: usize,
        allowed_extensions: &[String],
        allowed_content_types: &[String],
    ) -> Self {
        UploadRules {
            max_size_bytes,
            allowed_extensions: allowed_extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            allowed_content_types: allowed_content_types
                .iter()
                .map(|c| c.to_lowercase())
                .collect(),
        }
    }

    /// Validate an upload before it touches storage. The extension must be
    /// allowed, the content type must be allowed, and the two must agree so a
    /// renamed file cannot smuggle a different format through.
    pub fn validate(
        &self,
        file_name: &str,
        content_type: &str,
        size: usize,
    ) -> Result<(), FileValidationError> {
        if size == 0 {
            return Err(FileValidationError::Empty);
        }
        if size > self.max_size_bytes {
            return Err(FileValidationError::TooLarge {
                size,
                max: self.max_size_bytes,
            });
        }

        let extension = extract_extension(file_name).ok_or(FileValidationError::InvalidFileName)?;
        if !self.allowed_extensions.iter().any(|e| e == &extension) {
            return Err(FileValidationError::ExtensionNotAllowed(extension));
        }

        let content_type = content_type.to_lowercase();
        // Strip any parameters, e.g. "application/pdf; charset=binary".
        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or(&content_type)
            .trim()
            .to_string();
        if !self.allowed_content_types.iter().any(|c| c == &media_type) {
            return Err(FileValidationError::ContentTypeNotAllowed(media_type));
        }

        if !extension_matches_content_type(&extension, &media_type) {
            return Err(FileValidationError::ContentTypeMismatch {
                content_type: media_type,
                extension,
            });
        }

        Ok(())
    }
}

fn extract_extension(file_name: &str) -> Option<String> {
    let name = file_name.trim();
    if name.is_empty() {
        return None;
    }
    let (stem, extension) = name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_lowercase())
}

/// The known extension/content-type pairs for the formats we accept.
fn extension_matches_content_type(extension: &str, content_type: &str) -> bool {
    matches!(
        (extension, content_type),
        ("pdf", "application/pdf")
            | ("doc", "application/msword")
            | (
                "docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            )
            | ("jpg" | "jpeg", "image/jpeg")
            | ("png", "image/png")
            | ("webp", "image/webp")
    )
}

/// Content type to serve a stored object under, derived from its extension.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
