use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a completed file upload.
///
/// `url` is directly fetchable by a browser, `path` is the object path inside
/// the backend (`<folder>/<object id>`), and `file_name` is the name the file
/// was uploaded under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub url: String,
    pub path: String,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_serializes_camel_case() {
        let result = UploadResult {
            url: "http://localhost:4000/files/resumes/abc".to_string(),
            path: "resumes/abc".to_string(),
            file_name: "resume.pdf".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value.get("fileName"),
            Some(&serde_json::json!("resume.pdf"))
        );
        assert!(value.get("file_name").is_none());
    }
}
