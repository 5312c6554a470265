//! OpenAPI documentation.
//! API version is in `crate::constants::API_VERSION`; handler annotations use
//! the literal /api/v1 prefix.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use jobgrid_core::models;
use jobgrid_search::JobDocument;

/// Registers the bearer token scheme referenced by the protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JobGrid API",
        version = "0.1.0",
        description = "Job board platform API: account registration and login, profile management, saved jobs, document and image uploads, job search, employer onboarding, and notifications. All endpoints are versioned under /api/v1/.",
        contact(
            name = "API Support",
            url = "https://github.com/yourusername/jobgrid"
        )
    ),
    modifiers(&SecurityAddon),
    paths(
        // Auth
        handlers::auth::register,
        handlers::auth::login,
        // Profile
        handlers::profile::get_profile,
        handlers::profile::update_profile,
        // Saved jobs
        handlers::saved_jobs::save_job,
        handlers::saved_jobs::list_saved_jobs,
        handlers::saved_jobs::delete_saved_job,
        // Uploads
        handlers::uploads::upload_file,
        handlers::uploads::get_upload_url,
        handlers::uploads::delete_upload,
        // Job search
        handlers::search::search_jobs,
        // Onboarding
        handlers::onboarding::onboarding_steps,
        // Notifications
        handlers::notifications::list_notifications,
        handlers::notifications::mark_notification_read,
        handlers::notifications::mark_all_notifications_read,
    ),
    components(
        schemas(
            // Core models
            models::UserResponse,
            models::AccountType,
            models::SavedJob,
            models::Notification,
            models::NotificationKind,
            models::OnboardingStep,
            models::UploadResult,
            models::PaginationMeta,
            // Auth
            handlers::auth::RegisterRequest,
            handlers::auth::LoginRequest,
            handlers::auth::AuthResponse,
            // Profile
            handlers::profile::ProfileResponse,
            handlers::profile::UpdateProfileRequest,
            // Saved jobs
            handlers::saved_jobs::SaveJobRequest,
            handlers::saved_jobs::SavedJobsResponse,
            // Search
            handlers::search::JobSearchResponse,
            JobDocument,
            // Notifications
            handlers::notifications::NotificationsResponse,
            handlers::notifications::ReadAllResponse,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "auth", description = "Account registration and login"),
        (name = "profile", description = "Profile read and update for the signed-in user"),
        (name = "saved-jobs", description = "Saving jobs for later, capped per user"),
        (name = "uploads", description = "Resume, cover letter and profile image uploads"),
        (name = "jobs", description = "Job search backed by the search engine"),
        (name = "onboarding", description = "Employer onboarding wizard steps"),
        (name = "notifications", description = "User notifications and read state")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_contains_the_versioned_paths() {
        let spec = get_openapi_spec();
        for path in [
            "/api/v1/auth/register",
            "/api/v1/auth/login",
            "/api/v1/profile",
            "/api/v1/saved-jobs",
            "/api/v1/saved-jobs/{job_id}",
            "/api/v1/uploads/{folder}",
            "/api/v1/jobs/search",
            "/api/v1/onboarding/steps",
            "/api/v1/notifications",
            "/api/v1/notifications/{id}/read",
            "/api/v1/notifications/read-all",
        ] {
            assert!(
                spec.paths.paths.contains_key(path),
                "missing path: {}",
                path
            );
        }
    }

    #[test]
    fn spec_registers_the_bearer_scheme() {
        let spec = get_openapi_spec();
        let components = spec.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
