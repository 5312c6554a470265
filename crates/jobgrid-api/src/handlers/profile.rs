//! Profile read and update for the signed-in user.

use crate::auth::models::AuthContext;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use jobgrid_core::models::{AccountType, Profile, ProfileUpdate};
use jobgrid_core::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// Profile shape returned to clients. Storage keys stay server-side; only the
/// original file names are exposed so the UI can label what was uploaded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: i64,
    pub name: String,
    pub account_type: AccountType,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub resume_file_name: Option<String>,
    pub cover_letter_file_name: Option<String>,
    pub profile_image_file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            name: profile.name,
            account_type: profile.account_type,
            headline: profile.headline,
            location: profile.location,
            resume_file_name: profile.resume_file_name,
            cover_letter_file_name: profile.cover_letter_file_name,
            profile_image_file_name: profile.profile_image_file_name,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = super::auth::validate_account_type))]
    pub account_type: Option<String>,
    #[validate(length(max = 200, message = "Headline must be at most 200 characters"))]
    pub headline: Option<String>,
    #[validate(length(max = 120, message = "Location must be at most 120 characters"))]
    pub location: Option<String>,
}

/// Fetch the signed-in user's profile.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current profile", body = ProfileResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Profile missing", body = ErrorResponse),
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let profile = state
        .db
        .profiles
        .find_by_user_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// Update name, account type, headline and location. Empty-string headline
/// or location clears the field; an absent account type leaves it unchanged.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Profile missing", body = ErrorResponse),
    )
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    // The string form was already validated; parse to the enum for storage.
    let account_type = payload
        .account_type
        .as_deref()
        .map(str::parse::<AccountType>)
        .transpose()
        .map_err(AppError::InvalidInput)?;

    let update = ProfileUpdate {
        name: payload.name.trim().to_string(),
        account_type,
        headline: normalize_optional(payload.headline),
        location: normalize_optional(payload.location),
    };

    let profile = state.db.profiles.update(auth.user_id, &update).await?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(ProfileResponse::from(profile)))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn response_hides_storage_keys() {
        let profile = Profile {
            id: 7,
            user_id: 3,
            name: "Dev".to_string(),
            account_type: AccountType::User,
            headline: Some("Backend engineer".to_string()),
            location: None,
            resume_key: Some("storage:resumes:abc".to_string()),
            resume_file_name: Some("resume.pdf".to_string()),
            cover_letter_key: None,
            cover_letter_file_name: None,
            profile_image_key: None,
            profile_image_file_name: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(ProfileResponse::from(profile)).unwrap();
        assert_eq!(value["resumeFileName"], "resume.pdf");
        assert_eq!(value["accountType"], "user");
        assert!(value.get("resumeKey").is_none());
        assert!(value.get("resume_key").is_none());
    }

    #[test]
    fn blank_optional_fields_clear() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" Berlin ".to_string())),
            Some("Berlin".to_string())
        );
        assert_eq!(normalize_optional(None), None);
    }

    #[test]
    fn update_requires_a_name() {
        let payload = UpdateProfileRequest {
            name: "".to_string(),
            account_type: None,
            headline: None,
            location: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_rejects_unknown_account_type() {
        let payload = UpdateProfileRequest {
            name: "Dev".to_string(),
            account_type: Some("admin".to_string()),
            headline: None,
            location: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("account_type"));

        let payload = UpdateProfileRequest {
            name: "Dev".to_string(),
            account_type: Some("employer".to_string()),
            headline: None,
            location: None,
        };
        assert!(payload.validate().is_ok());
    }
}
