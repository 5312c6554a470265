//! User account repository.

use super::profiles::PROFILE_COLUMNS;
use crate::db::TransactionGuard;
use jobgrid_core::models::{AccountType, Profile, User};
use jobgrid_core::AppError;
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, email, password_hash, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user together with their profile in one transaction.
    ///
    /// The caller passes an already-hashed password and a normalized
    /// (lowercased, trimmed) email. A duplicate email maps to a conflict.
    #[tracing::instrument(skip(self, password_hash), fields(db.table = "users", db.operation = "insert"))]
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        account_type: AccountType,
    ) -> Result<(User, Profile), AppError> {
        let mut guard = TransactionGuard::begin(&self.pool).await?;
        let tx = guard.tx()?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_duplicate_email)?;

        let profile = sqlx::query_as::<_, Profile>(&format!(
            "INSERT INTO profiles (user_id, name, account_type) VALUES ($1, $2, $3) RETURNING {}",
            PROFILE_COLUMNS
        ))
        .bind(user.id)
        .bind(name)
        .bind(account_type)
        .fetch_one(&mut **tx)
        .await?;

        guard.commit().await?;

        tracing::info!(user_id = user.id, "User created");

        Ok((user, profile))
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select"))]
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

fn map_duplicate_email(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return AppError::Conflict("An account with this email already exists".to_string());
        }
    }
    AppError::Database(err)
}
