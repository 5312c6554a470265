//! Saved jobs: save, list and remove, enforcing the per-user cap.

use crate::auth::models::AuthContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use jobgrid_core::models::SavedJob;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobRequest {
    #[validate(range(min = 1, message = "Job id must be a positive number"))]
    pub job_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SavedJobsResponse {
    pub jobs: Vec<SavedJob>,
    pub total: i64,
}

/// Save a job for later. Fails with 409 once the user holds 50 saved jobs or
/// when the job is already on the list.
#[utoipa::path(
    post,
    path = "/api/v1/saved-jobs",
    tag = "saved-jobs",
    security(("bearer_auth" = [])),
    request_body = SaveJobRequest,
    responses(
        (status = 201, description = "Job saved", body = SavedJob),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 409, description = "Limit reached or already saved", body = ErrorResponse),
    )
)]
pub async fn save_job(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    ValidatedJson(payload): ValidatedJson<SaveJobRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let saved = state
        .db
        .saved_jobs
        .save(auth.user_id, payload.job_id)
        .await?;

    tracing::info!(user_id = auth.user_id, job_id = payload.job_id, "Job saved");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// List the user's saved jobs, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/saved-jobs",
    tag = "saved-jobs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Saved jobs", body = SavedJobsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
pub async fn list_saved_jobs(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let jobs = state.db.saved_jobs.list(auth.user_id).await?;
    let total = jobs.len() as i64;

    Ok(Json(SavedJobsResponse { jobs, total }))
}

/// Remove a job from the saved list.
#[utoipa::path(
    delete,
    path = "/api/v1/saved-jobs/{job_id}",
    tag = "saved-jobs",
    security(("bearer_auth" = [])),
    params(("job_id" = i64, Path, description = "Job identifier")),
    responses(
        (status = 204, description = "Removed"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Job was not saved", body = ErrorResponse),
    )
)]
pub async fn delete_saved_job(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(job_id): Path<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.db.saved_jobs.delete(auth.user_id, job_id).await?;

    tracing::info!(user_id = auth.user_id, job_id, "Saved job removed");

    Ok(StatusCode::NO_CONTENT)
}
