//! Application state and sub-state types.
//!
//! AppState is split into domain sub-states so setup code can build each
//! concern independently, and handlers reach for `state.db` / `state.storage`
//! / `state.search` rather than a flat bag of fields.

use crate::validation::UploadRules;
use jobgrid_core::Config;
use jobgrid_db::{
    NotificationRepository, ProfileRepository, SavedJobRepository, UserRepository,
};
use jobgrid_search::SearchClient;
use jobgrid_storage::{Storage, UploadFolder};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Database pool and repositories.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub users: UserRepository,
    pub profiles: ProfileRepository,
    pub saved_jobs: SavedJobRepository,
    pub notifications: NotificationRepository,
}

impl DbState {
    pub fn new(pool: PgPool) -> Self {
        DbState {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            saved_jobs: SavedJobRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Storage backend plus the per-folder upload rules.
#[derive(Clone)]
pub struct StorageState {
    pub backend: Arc<dyn Storage>,
    pub document_rules: UploadRules,
    pub image_rules: UploadRules,
    pub presigned_expiry: Duration,
}

impl StorageState {
    /// Rules applying to a folder: resumes and cover letters share the
    /// document rules, profile images use the image rules.
    pub fn rules_for(&self, folder: UploadFolder) -> &UploadRules {
        if folder.is_document() {
            &self.document_rules
        } else {
            &self.image_rules
        }
    }
}

/// Search engine client.
#[derive(Clone)]
pub struct SearchState {
    pub client: SearchClient,
}

/// Shared application state handed to every handler as `Arc<AppState>`.
pub struct AppState {
    pub db: DbState,
    pub storage: StorageState,
    pub search: SearchState,
    pub config: Config,
}
