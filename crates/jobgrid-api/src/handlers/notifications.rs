//! Notification list and read-state endpoints.

use crate::auth::models::AuthContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use jobgrid_core::models::Notification;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationsQuery {
    /// When true, only unread notifications are returned.
    #[serde(default)]
    pub unread_only: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadAllResponse {
    pub updated: u64,
}

/// List the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    tag = "notifications",
    security(("bearer_auth" = [])),
    params(NotificationsQuery),
    responses(
        (status = 200, description = "Notifications", body = NotificationsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Query(query): Query<NotificationsQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let notifications = state
        .db
        .notifications
        .list(auth.user_id, query.unread_only)
        .await?;
    let unread_count = state.db.notifications.unread_count(auth.user_id).await?;

    Ok(Json(NotificationsResponse {
        notifications,
        unread_count,
    }))
}

/// Mark a single notification read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    tag = "notifications",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Notification identifier")),
    responses(
        (status = 204, description = "Marked read"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No such notification for this user", body = ErrorResponse),
    )
)]
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.db.notifications.mark_read(auth.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark every notification read and report how many changed.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/read-all",
    tag = "notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Count of notifications marked read", body = ReadAllResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
pub async fn mark_all_notifications_read(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let updated = state.db.notifications.mark_all_read(auth.user_id).await?;

    if updated > 0 {
        tracing::debug!(user_id = auth.user_id, updated, "Notifications marked read");
    }

    Ok(Json(ReadAllResponse { updated }))
}
