//! Registration and login.

use crate::auth::{jwt, password};
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use jobgrid_core::models::{AccountType, NotificationKind, UserResponse};
use jobgrid_core::AppError;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = password, message = "Passwords do not match"))]
    pub confirm_password: String,
    #[validate(custom(function = validate_account_type))]
    pub account_type: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

pub(crate) fn validate_account_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AccountType>()
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("account_type")
                .with_message("Account type must be either 'user' or 'employer'".into())
        })
}

/// Register a new account. Creates the user and their profile together and
/// returns a token so the client is signed in immediately.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let email = payload.email.trim().to_lowercase();
    // The string form was already validated; parse to the enum for storage.
    let account_type: AccountType = payload
        .account_type
        .parse()
        .map_err(AppError::InvalidInput)?;

    let password_hash = password::hash_password(&payload.password)?;

    let (user, _profile) = state
        .db
        .users
        .create(&email, &password_hash, payload.name.trim(), account_type)
        .await?;

    // Best effort; registration already succeeded.
    if let Err(err) = state
        .db
        .notifications
        .create(
            user.id,
            NotificationKind::System,
            "Welcome to JobGrid",
            "Your account is ready. Jobs you save will show up in your saved list.",
        )
        .await
    {
        tracing::warn!(error = %err, user_id = user.id, "Failed to create welcome notification");
    }

    let token = jwt::create_token(
        user.id,
        account_type,
        state.config.jwt_secret(),
        state.config.jwt_expiry_hours(),
    )?;

    tracing::info!(user_id = user.id, %account_type, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    ))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let email = payload.email.trim().to_lowercase();

    // Same response for unknown email and wrong password, so the endpoint
    // does not leak which emails are registered.
    let invalid_credentials =
        || AppError::Unauthorized("Invalid email or password".to_string());

    let user = state
        .db
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        return Err(invalid_credentials().into());
    }

    let profile = state
        .db
        .profiles
        .find_by_user_id(user.id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("User {} has no profile", user.id)))?;

    let token = jwt::create_token(
        user.id,
        profile.account_type,
        state.config.jwt_secret(),
        state.config.jwt_expiry_hours(),
    )?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
