//! Notification repository.

use jobgrid_core::models::{Notification, NotificationKind};
use jobgrid_core::AppError;
use sqlx::PgPool;

const NOTIFICATION_COLUMNS: &str = "id, user_id, kind, title, body, is_read, created_at";

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, title, body), fields(db.table = "notifications", db.operation = "insert"))]
    pub async fn create(
        &self,
        user_id: i64,
        kind: NotificationKind,
        title: &str,
        body: &str,
    ) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            "INSERT INTO notifications (user_id, kind, title, body) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            NOTIFICATION_COLUMNS
        ))
        .bind(user_id)
        .bind(kind)
        .bind(title)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    /// Notifications for a user, newest first.
    #[tracing::instrument(skip(self), fields(db.table = "notifications", db.operation = "select"))]
    pub async fn list(
        &self,
        user_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, AppError> {
        let query = if unread_only {
            format!(
                "SELECT {} FROM notifications WHERE user_id = $1 AND is_read = FALSE \
                 ORDER BY created_at DESC, id DESC",
                NOTIFICATION_COLUMNS
            )
        } else {
            format!(
                "SELECT {} FROM notifications WHERE user_id = $1 \
                 ORDER BY created_at DESC, id DESC",
                NOTIFICATION_COLUMNS
            )
        };

        let notifications = sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(notifications)
    }

    #[tracing::instrument(skip(self), fields(db.table = "notifications", db.operation = "select"))]
    pub async fn unread_count(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Mark one notification read. Scoped by user so one user cannot touch
    /// another's notifications.
    #[tracing::instrument(skip(self), fields(db.table = "notifications", db.operation = "update"))]
    pub async fn mark_read(&self, user_id: i64, notification_id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(notification_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    /// Mark everything read; returns how many rows changed.
    #[tracing::instrument(skip(self), fields(db.table = "notifications", db.operation = "update"))]
    pub async fn mark_all_read(&self, user_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
