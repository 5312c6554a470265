//! Per-folder profile uploads (resume, cover letter, profile image).
//!
//! Each profile holds at most one object per folder. Uploading into an
//! occupied slot replaces the stored object; the old one is removed from the
//! backend after the new key is persisted.

use crate::auth::models::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use jobgrid_core::models::UploadResult;
use jobgrid_core::AppError;
use jobgrid_storage::keys::{object_path, parse_storage_key, sanitize_object_name};
use jobgrid_storage::UploadFolder;
use std::sync::Arc;
use uuid::Uuid;

fn parse_folder(folder: &str) -> Result<UploadFolder, AppError> {
    folder
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid upload folder: {}", folder)))
}

struct MultipartFile {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

/// Pull the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<MultipartFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                AppError::BadRequest("Multipart field 'file' is missing a file name".to_string())
            })?;
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        return Ok(MultipartFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    Err(AppError::BadRequest(
        "Multipart field 'file' is required".to_string(),
    ))
}

/// Upload a file into one of the profile's slots.
#[utoipa::path(
    post,
    path = "/api/v1/uploads/{folder}",
    tag = "uploads",
    security(("bearer_auth" = [])),
    params(("folder" = String, Path, description = "resumes, cover-letters or profile-images")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Stored", body = UploadResult),
        (status = 400, description = "Invalid folder, multipart body or file", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Profile missing", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(folder): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let folder = parse_folder(&folder)?;
    let file = read_file_field(multipart).await?;

    state
        .storage
        .rules_for(folder)
        .validate(&file.file_name, &file.content_type, file.data.len())?;

    // Read the current slot first so a replaced object can be cleaned up, and
    // so a missing profile fails before any bytes are written.
    let previous = state.db.profiles.get_upload(auth.user_id, folder).await?;

    let object_id = format!("{}-{}", Uuid::new_v4(), sanitize_object_name(&file.file_name));
    let size_bytes = file.data.len();

    let (storage_key, result) = state
        .storage
        .backend
        .upload(
            folder,
            &object_id,
            &file.file_name,
            &file.content_type,
            file.data,
        )
        .await?;

    if let Err(err) = state
        .db
        .profiles
        .set_upload(auth.user_id, folder, &storage_key, &file.file_name)
        .await
    {
        // The object is orphaned if this cleanup fails; log it either way.
        if let Err(cleanup_err) = state.storage.backend.delete(&storage_key).await {
            tracing::warn!(
                error = %cleanup_err,
                key = %storage_key,
                "Failed to remove object after database error"
            );
        }
        return Err(err.into());
    }

    if let Some(previous) = previous {
        if previous.storage_key != storage_key {
            if let Err(err) = state.storage.backend.delete(&previous.storage_key).await {
                tracing::warn!(
                    error = %err,
                    key = %previous.storage_key,
                    "Failed to delete replaced upload"
                );
            }
        }
    }

    tracing::info!(
        user_id = auth.user_id,
        %folder,
        size_bytes,
        "Upload stored"
    );

    Ok((StatusCode::CREATED, Json(result)))
}

/// Fetch a short-lived download URL for the stored upload in a folder.
#[utoipa::path(
    get,
    path = "/api/v1/uploads/{folder}",
    tag = "uploads",
    security(("bearer_auth" = [])),
    params(("folder" = String, Path, description = "resumes, cover-letters or profile-images")),
    responses(
        (status = 200, description = "Download URL", body = UploadResult),
        (status = 400, description = "Invalid folder", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Nothing uploaded in this folder", body = ErrorResponse),
    )
)]
pub async fn get_upload_url(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(folder): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let folder = parse_folder(&folder)?;

    let stored = state
        .db
        .profiles
        .get_upload(auth.user_id, folder)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No upload found in folder '{}'", folder))
        })?;

    let url = state
        .storage
        .backend
        .get_presigned_url(&stored.storage_key, state.storage.presigned_expiry)
        .await?;
    let (_, object_id) = parse_storage_key(&stored.storage_key)?;

    Ok(Json(UploadResult {
        url,
        path: object_path(folder, object_id),
        file_name: stored.file_name,
    }))
}

/// Remove the stored upload in a folder.
#[utoipa::path(
    delete,
    path = "/api/v1/uploads/{folder}",
    tag = "uploads",
    security(("bearer_auth" = [])),
    params(("folder" = String, Path, description = "resumes, cover-letters or profile-images")),
    responses(
        (status = 204, description = "Removed"),
        (status = 400, description = "Invalid folder", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Nothing uploaded in this folder", body = ErrorResponse),
    )
)]
pub async fn delete_upload(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(folder): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let folder = parse_folder(&folder)?;

    let stored = state
        .db
        .profiles
        .get_upload(auth.user_id, folder)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No upload found in folder '{}'", folder))
        })?;

    // The slot is cleared even if the backend already lost the object.
    match state.storage.backend.delete(&stored.storage_key).await {
        Ok(()) => {}
        Err(jobgrid_storage::StorageError::NotFound(key)) => {
            tracing::warn!(key = %key, "Stored object was already gone");
        }
        Err(err) => return Err(err.into()),
    }

    state.db.profiles.clear_upload(auth.user_id, folder).await?;

    tracing::info!(user_id = auth.user_id, %folder, "Upload removed");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_parsing_accepts_the_three_folders() {
        assert_eq!(parse_folder("resumes").unwrap(), UploadFolder::Resumes);
        assert_eq!(
            parse_folder("cover-letters").unwrap(),
            UploadFolder::CoverLetters
        );
        assert_eq!(
            parse_folder("profile-images").unwrap(),
            UploadFolder::ProfileImages
        );
    }

    #[test]
    fn folder_parsing_reports_the_bad_value() {
        let err = parse_folder("videos").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Invalid upload folder: videos"));
    }
}
