//! Service initialization and application state setup

use crate::state::{AppState, DbState, SearchState, StorageState};
use crate::validation::UploadRules;
use anyhow::Result;
use jobgrid_core::Config;
use jobgrid_search::{SearchClient, SearchConfig};
use jobgrid_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Build the search engine client from configuration.
pub fn setup_search(config: &Config) -> Result<SearchState> {
    let client = SearchClient::new(SearchConfig {
        base_url: config.search_url().to_string(),
        api_key: config.search_api_key().to_string(),
        collection: config.search_collection().to_string(),
        query_by: config.search_query_by().to_string(),
        timeout: Duration::from_secs(config.search_timeout_secs()),
    })?;

    tracing::info!(
        url = %config.search_url(),
        collection = %config.search_collection(),
        "Search client initialized"
    );

    Ok(SearchState { client })
}

/// Assemble the shared application state from the initialized services.
pub fn build_state(
    config: &Config,
    pool: PgPool,
    storage: Arc<dyn Storage>,
    search: SearchState,
) -> Arc<AppState> {
    let document_rules = UploadRules::new(
        config.max_document_size_bytes(),
        config.document_allowed_extensions(),
        config.document_allowed_content_types(),
    );
    let image_rules = UploadRules::new(
        config.max_image_size_bytes(),
        config.image_allowed_extensions(),
        config.image_allowed_content_types(),
    );

    Arc::new(AppState {
        db: DbState::new(pool),
        storage: StorageState {
            backend: storage,
            document_rules,
            image_rules,
            presigned_expiry: Duration::from_secs(config.presigned_url_expiry_secs()),
        },
        search,
        config: config.clone(),
    })
}
