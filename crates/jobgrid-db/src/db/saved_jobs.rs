//! Saved-jobs (bookmark) repository.
//!
//! Saving is capped at [`SAVED_JOBS_LIMIT`] bookmarks per user. The check and
//! the insert run in one transaction that first takes a row-level lock on the
//! user, so two concurrent saves for the same user serialize and cannot both
//! pass the count at limit-minus-one. Duplicates are additionally rejected by
//! the table's composite primary key, which holds even against writers that
//! bypass this repository.

use crate::db::TransactionGuard;
use jobgrid_core::constants::SAVED_JOBS_LIMIT;
use jobgrid_core::models::SavedJob;
use jobgrid_core::AppError;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SavedJobRepository {
    pool: PgPool,
}

impl SavedJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Save a job for a user, enforcing the per-user limit.
    ///
    /// Fails with [`AppError::SavedJobsLimitReached`] once the user already
    /// has the maximum number of saved jobs, and with a conflict when the job
    /// is already saved. Nothing is written in either case.
    #[tracing::instrument(skip(self), fields(db.table = "saved_jobs", db.operation = "insert"))]
    pub async fn save(&self, user_id: i64, job_id: i64) -> Result<SavedJob, AppError> {
        let mut guard = TransactionGuard::begin(&self.pool).await?;
        let tx = guard.tx()?;

        // Serializes concurrent saves for this user; also confirms the user exists.
        let locked_user: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE id = $1 FOR UPDATE")
                .bind(user_id)
                .fetch_optional(&mut **tx)
                .await?;
        if locked_user.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM saved_jobs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut **tx)
            .await?;

        if count >= SAVED_JOBS_LIMIT {
            tracing::debug!(user_id, job_id, count, "Saved jobs limit reached");
            return Err(AppError::SavedJobsLimitReached);
        }

        let saved = sqlx::query_as::<_, SavedJob>(
            "INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2) \
             RETURNING user_id, job_id, created_at",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_duplicate_saved_job)?;

        guard.commit().await?;

        tracing::info!(user_id, job_id, "Job saved");

        Ok(saved)
    }

    /// Remove a bookmark. Unsaving is never blocked by the limit.
    #[tracing::instrument(skip(self), fields(db.table = "saved_jobs", db.operation = "delete"))]
    pub async fn delete(&self, user_id: i64, job_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Saved job not found".to_string()));
        }

        tracing::info!(user_id, job_id, "Job unsaved");

        Ok(())
    }

    /// All bookmarks for a user, newest first. Bounded by the saved-jobs
    /// limit, so no pagination.
    #[tracing::instrument(skip(self), fields(db.table = "saved_jobs", db.operation = "select"))]
    pub async fn list(&self, user_id: i64) -> Result<Vec<SavedJob>, AppError> {
        let jobs = sqlx::query_as::<_, SavedJob>(
            "SELECT user_id, job_id, created_at FROM saved_jobs \
             WHERE user_id = $1 ORDER BY created_at DESC, job_id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    #[tracing::instrument(skip(self), fields(db.table = "saved_jobs", db.operation = "select"))]
    pub async fn count(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM saved_jobs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_duplicate_saved_job(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return AppError::Conflict("Job is already saved".to_string());
        }
    }
    AppError::Database(err)
}
