//! Domain route groups (auth, profile, saved jobs, uploads, search, ...).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;

pub fn auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/auth/register", API_PREFIX),
            post(handlers::auth::register),
        )
        .route(
            &format!("{}/auth/login", API_PREFIX),
            post(handlers::auth::login),
        )
        .with_state(state)
}

pub fn job_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/jobs/search", API_PREFIX),
            get(handlers::search::search_jobs),
        )
        .with_state(state)
}

pub fn onboarding_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/onboarding/steps", API_PREFIX),
            get(handlers::onboarding::onboarding_steps),
        )
        .with_state(state)
}

/// Serves locally stored objects. Lives outside the versioned API because the
/// URLs are baked into stored upload results.
pub fn file_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/files/{folder}/{object_id}",
            get(handlers::files::serve_file),
        )
        .with_state(state)
}

pub fn profile_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/profile", API_PREFIX),
            get(handlers::profile::get_profile),
        )
        .route(
            &format!("{}/profile", API_PREFIX),
            put(handlers::profile::update_profile),
        )
        .with_state(state)
}

pub fn saved_job_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/saved-jobs", API_PREFIX),
            post(handlers::saved_jobs::save_job),
        )
        .route(
            &format!("{}/saved-jobs", API_PREFIX),
            get(handlers::saved_jobs::list_saved_jobs),
        )
        .route(
            &format!("{}/saved-jobs/{{job_id}}", API_PREFIX),
            delete(handlers::saved_jobs::delete_saved_job),
        )
        .with_state(state)
}

pub fn upload_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/uploads/{{folder}}", API_PREFIX),
            post(handlers::uploads::upload_file),
        )
        .route(
            &format!("{}/uploads/{{folder}}", API_PREFIX),
            get(handlers::uploads::get_upload_url),
        )
        .route(
            &format!("{}/uploads/{{folder}}", API_PREFIX),
            delete(handlers::uploads::delete_upload),
        )
        .with_state(state)
}

pub fn notification_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/notifications", API_PREFIX),
            get(handlers::notifications::list_notifications),
        )
        .route(
            &format!("{}/notifications/{{id}}/read", API_PREFIX),
            post(handlers::notifications::mark_notification_read),
        )
        .route(
            &format!("{}/notifications/read-all", API_PREFIX),
            post(handlers::notifications::mark_all_notifications_read),
        )
        .with_state(state)
}
