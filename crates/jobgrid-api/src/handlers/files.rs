//! Public file serving for locally stored objects.
//!
//! The local backend builds URLs pointing at `/files/{folder}/{object_id}`;
//! this handler resolves them. S3 deployments serve objects from the bucket
//! URL instead, so this route simply 404s for keys that are not on disk.

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::validation::content_type_for_extension;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use jobgrid_core::AppError;
use jobgrid_storage::keys::storage_key;
use jobgrid_storage::UploadFolder;
use std::sync::Arc;

pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path((folder, object_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, HttpAppError> {
    let folder: UploadFolder = folder
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid upload folder: {}", folder)))?;

    let key = storage_key(folder, &object_id);
    let data = state.storage.backend.download(&key).await?;

    let content_type = object_id
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .and_then(|ext| content_type_for_extension(&ext))
        .unwrap_or("application/octet-stream");

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "private, max-age=300"),
        ],
        data,
    ))
}
