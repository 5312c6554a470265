//! Profile repository, including the per-folder upload slots.

use jobgrid_core::models::{Profile, ProfileUpdate};
use jobgrid_core::AppError;
use jobgrid_storage::UploadFolder;
use sqlx::PgPool;

pub(crate) const PROFILE_COLUMNS: &str = "id, user_id, name, account_type, headline, location, \
     resume_key, resume_file_name, cover_letter_key, cover_letter_file_name, \
     profile_image_key, profile_image_file_name, created_at, updated_at";

/// A stored upload slot: the opaque storage key plus the original file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub storage_key: String,
    pub file_name: String,
}

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "profiles", db.operation = "select"))]
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {} FROM profiles WHERE user_id = $1",
            PROFILE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self, update), fields(db.table = "profiles", db.operation = "update"))]
    pub async fn update(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> Result<Profile, AppError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE profiles SET name = $2, headline = $3, location = $4, \
             account_type = COALESCE($5, account_type), updated_at = NOW() \
             WHERE user_id = $1 RETURNING {}",
            PROFILE_COLUMNS
        ))
        .bind(user_id)
        .bind(&update.name)
        .bind(&update.headline)
        .bind(&update.location)
        .bind(update.account_type)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        Ok(profile)
    }

    /// Record an upload in the profile's slot for `folder`, replacing whatever
    /// key was there. The previous object (if any) is the caller's to delete.
    #[tracing::instrument(skip(self, storage_key, file_name), fields(db.table = "profiles", db.operation = "update"))]
    pub async fn set_upload(
        &self,
        user_id: i64,
        folder: UploadFolder,
        storage_key: &str,
        file_name: &str,
    ) -> Result<(), AppError> {
        let query = match folder {
            UploadFolder::Resumes => {
                "UPDATE profiles SET resume_key = $2, resume_file_name = $3, updated_at = NOW() \
                 WHERE user_id = $1"
            }
            UploadFolder::CoverLetters => {
                "UPDATE profiles SET cover_letter_key = $2, cover_letter_file_name = $3, \
                 updated_at = NOW() WHERE user_id = $1"
            }
            UploadFolder::ProfileImages => {
                "UPDATE profiles SET profile_image_key = $2, profile_image_file_name = $3, \
                 updated_at = NOW() WHERE user_id = $1"
            }
        };

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(storage_key)
            .bind(file_name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }

    /// Fetch the upload slot for `folder`. `Ok(None)` means the profile exists
    /// but has nothing uploaded there.
    #[tracing::instrument(skip(self), fields(db.table = "profiles", db.operation = "select"))]
    pub async fn get_upload(
        &self,
        user_id: i64,
        folder: UploadFolder,
    ) -> Result<Option<StoredUpload>, AppError> {
        let query = match folder {
            UploadFolder::Resumes => {
                "SELECT resume_key, resume_file_name FROM profiles WHERE user_id = $1"
            }
            UploadFolder::CoverLetters => {
                "SELECT cover_letter_key, cover_letter_file_name FROM profiles WHERE user_id = $1"
            }
            UploadFolder::ProfileImages => {
                "SELECT profile_image_key, profile_image_file_name FROM profiles WHERE user_id = $1"
            }
        };

        let row = sqlx::query_as::<_, (Option<String>, Option<String>)>(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        Ok(match row {
            (Some(storage_key), file_name) => Some(StoredUpload {
                storage_key,
                file_name: file_name.unwrap_or_default(),
            }),
            (None, _) => None,
        })
    }

    /// Clear the upload slot for `folder`.
    #[tracing::instrument(skip(self), fields(db.table = "profiles", db.operation = "update"))]
    pub async fn clear_upload(&self, user_id: i64, folder: UploadFolder) -> Result<(), AppError> {
        let query = match folder {
            UploadFolder::Resumes => {
                "UPDATE profiles SET resume_key = NULL, resume_file_name = NULL, \
                 updated_at = NOW() WHERE user_id = $1"
            }
            UploadFolder::CoverLetters => {
                "UPDATE profiles SET cover_letter_key = NULL, cover_letter_file_name = NULL, \
                 updated_at = NOW() WHERE user_id = $1"
            }
            UploadFolder::ProfileImages => {
                "UPDATE profiles SET profile_image_key = NULL, profile_image_file_name = NULL, \
                 updated_at = NOW() WHERE user_id = $1"
            }
        };

        let result = sqlx::query(query).bind(user_id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }
}
