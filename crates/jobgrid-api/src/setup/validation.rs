//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use jobgrid_core::Config;

/// Validate critical configuration values
///
/// Checks that critical configuration is set correctly and fails fast on
/// values that would cause security problems or runtime errors later.
pub fn validate_config(config: &Config) -> Result<()> {
    let is_production = config.is_production();

    // Validate CORS configuration in production
    if is_production && config.cors_origins().contains(&"*".to_string()) {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production - this is a security risk. \
            Please set specific allowed origins via CORS_ORIGINS environment variable."
        ));
    }

    // Validate database connection settings
    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    // Validate JWT settings
    if config.jwt_secret().is_empty() {
        return Err(anyhow::anyhow!(
            "JWT secret cannot be empty - set JWT_SECRET environment variable"
        ));
    }

    if is_production && config.jwt_secret().len() < 32 {
        return Err(anyhow::anyhow!(
            "JWT secret must be at least 32 characters in production"
        ));
    }

    if !is_production && config.jwt_secret().len() < 32 {
        tracing::warn!(
            "JWT secret is shorter than 32 characters - consider using a longer, more secure secret"
        );
    }

    if config.jwt_expiry_hours() <= 0 {
        return Err(anyhow::anyhow!("JWT expiry must be a positive number of hours"));
    }

    // Validate storage configuration
    match config.storage_backend() {
        "local" | "s3" => {}
        other => {
            return Err(anyhow::anyhow!(
                "Unknown storage backend '{}' (expected 'local' or 's3')",
                other
            ));
        }
    }

    if config.storage_backend() == "s3" && config.s3_bucket().is_empty() {
        return Err(anyhow::anyhow!(
            "S3_BUCKET must be set when using the s3 storage backend"
        ));
    }

    // Validate upload limits
    if config.max_document_size_bytes() == 0 {
        return Err(anyhow::anyhow!("Max document size cannot be 0"));
    }

    if config.max_image_size_bytes() == 0 {
        return Err(anyhow::anyhow!("Max image size cannot be 0"));
    }

    if config.document_allowed_extensions().is_empty() {
        return Err(anyhow::anyhow!("Document extension allowlist cannot be empty"));
    }

    if config.image_allowed_extensions().is_empty() {
        return Err(anyhow::anyhow!("Image extension allowlist cannot be empty"));
    }

    // Validate search configuration
    if config.search_url().trim().is_empty() {
        return Err(anyhow::anyhow!(
            "Search URL cannot be empty - set SEARCH_URL environment variable"
        ));
    }

    if config.search_timeout_secs() == 0 {
        return Err(anyhow::anyhow!("Search timeout cannot be 0"));
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
