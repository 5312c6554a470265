//! Application startup: configuration validation, database, storage, search,
//! and route assembly.

pub mod database;
pub mod routes;
pub mod server;
pub mod services;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use jobgrid_core::Config;
use std::sync::Arc;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration before touching any backing service.
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let search = services::setup_search(&config)?;
    let state = services::build_state(&config, pool, storage, search);

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
