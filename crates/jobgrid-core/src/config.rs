//! Application configuration loaded from the environment.
//!
//! `Config::from_env` reads every setting once at startup, applies defaults,
//! and fails fast on values that are required or unparseable. Cross-field
//! checks (e.g. production hardening) live in the API crate's setup
//! validation, which runs before anything is wired up.

use anyhow::{anyhow, Context, Result};
use std::str::FromStr;

/// Settings shared by any process that talks to the platform's backing
/// services, regardless of whether it serves HTTP.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    pub database_url: String,
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
}

/// Full platform configuration.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub base: BaseConfig,

    // Auth
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    // Storage
    pub storage_backend: String,
    pub local_storage_path: String,
    pub local_storage_base_url: String,
    pub s3_bucket: String,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub s3_public_base_url: Option<String>,
    pub presigned_url_expiry_secs: u64,

    // Upload limits and allowlists
    pub max_document_size_bytes: usize,
    pub document_allowed_extensions: Vec<String>,
    pub document_allowed_content_types: Vec<String>,
    pub max_image_size_bytes: usize,
    pub image_allowed_extensions: Vec<String>,
    pub image_allowed_content_types: Vec<String>,

    // Job search engine
    pub search_url: String,
    pub search_api_key: String,
    pub search_collection: String,
    pub search_query_by: String,
    pub search_timeout_secs: u64,
}

/// Boxed so `Config` stays cheap to clone into handlers and sub-states.
#[derive(Debug, Clone)]
pub struct Config(pub Box<PlatformConfig>);

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_required(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("{} environment variable not set", key))
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn env_list(key: &str, default: &str) -> Vec<String> {
    env_or(key, default)
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env if present; real environment variables take precedence.
        dotenvy::dotenv().ok();

        let base = BaseConfig {
            database_url: env_required("DATABASE_URL")?,
            server_port: env_parse("PORT", 4000)?,
            environment: env_or("ENVIRONMENT", "development"),
            cors_origins: env_list("CORS_ORIGINS", "*"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 10)?,
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", 30)?,
        };

        let max_document_size_mb: usize = env_parse("MAX_DOCUMENT_SIZE_MB", 5)?;
        let max_image_size_mb: usize = env_parse("MAX_IMAGE_SIZE_MB", 2)?;

        let config = PlatformConfig {
            base,

            jwt_secret: env_required("JWT_SECRET")?,
            jwt_expiry_hours: env_parse("JWT_EXPIRY_HOURS", 24)?,

            storage_backend: env_or("STORAGE_BACKEND", "local").to_lowercase(),
            local_storage_path: env_or("LOCAL_STORAGE_PATH", "./data/uploads"),
            local_storage_base_url: env_or(
                "LOCAL_STORAGE_BASE_URL",
                "http://localhost:4000/files",
            ),
            s3_bucket: env_or("S3_BUCKET", ""),
            s3_region: env_optional("S3_REGION"),
            s3_endpoint: env_optional("S3_ENDPOINT"),
            s3_public_base_url: env_optional("S3_PUBLIC_BASE_URL"),
            presigned_url_expiry_secs: env_parse("PRESIGNED_URL_EXPIRY_SECS", 900)?,

            max_document_size_bytes: max_document_size_mb * 1024 * 1024,
            document_allowed_extensions: env_list("DOCUMENT_ALLOWED_EXTENSIONS", "pdf,doc,docx"),
            document_allowed_content_types: env_list(
                "DOCUMENT_ALLOWED_CONTENT_TYPES",
                "application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
            max_image_size_bytes: max_image_size_mb * 1024 * 1024,
            image_allowed_extensions: env_list("IMAGE_ALLOWED_EXTENSIONS", "jpg,jpeg,png,webp"),
            image_allowed_content_types: env_list(
                "IMAGE_ALLOWED_CONTENT_TYPES",
                "image/jpeg,image/png,image/webp",
            ),

            search_url: env_or("SEARCH_URL", "http://localhost:8108"),
            search_api_key: env_or("SEARCH_API_KEY", ""),
            search_collection: env_or("SEARCH_COLLECTION", "jobs"),
            search_query_by: env_or("SEARCH_QUERY_BY", "title,company,description"),
            search_timeout_secs: env_parse("SEARCH_TIMEOUT_SECS", 5)?,
        };

        Ok(Config(Box::new(config)))
    }

    pub fn database_url(&self) -> &str {
        &self.0.base.database_url
    }

    pub fn server_port(&self) -> u16 {
        self.0.base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.0.base.environment
    }

    pub fn is_production(&self) -> bool {
        matches!(self.0.base.environment.as_str(), "production" | "prod")
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.0.base.cors_origins
    }

    pub fn db_max_connections(&self) -> u32 {
        self.0.base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.0.base.db_timeout_seconds
    }

    pub fn jwt_secret(&self) -> &str {
        &self.0.jwt_secret
    }

    pub fn jwt_expiry_hours(&self) -> i64 {
        self.0.jwt_expiry_hours
    }

    pub fn storage_backend(&self) -> &str {
        &self.0.storage_backend
    }

    pub fn local_storage_path(&self) -> &str {
        &self.0.local_storage_path
    }

    pub fn local_storage_base_url(&self) -> &str {
        &self.0.local_storage_base_url
    }

    pub fn s3_bucket(&self) -> &str {
        &self.0.s3_bucket
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.0.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.0.s3_endpoint.as_deref()
    }

    pub fn s3_public_base_url(&self) -> Option<&str> {
        self.0.s3_public_base_url.as_deref()
    }

    pub fn presigned_url_expiry_secs(&self) -> u64 {
        self.0.presigned_url_expiry_secs
    }

    pub fn max_document_size_bytes(&self) -> usize {
        self.0.max_document_size_bytes
    }

    pub fn document_allowed_extensions(&self) -> &[String] {
        &self.0.document_allowed_extensions
    }

    pub fn document_allowed_content_types(&self) -> &[String] {
        &self.0.document_allowed_content_types
    }

    pub fn max_image_size_bytes(&self) -> usize {
        self.0.max_image_size_bytes
    }

    pub fn image_allowed_extensions(&self) -> &[String] {
        &self.0.image_allowed_extensions
    }

    pub fn image_allowed_content_types(&self) -> &[String] {
        &self.0.image_allowed_content_types
    }

    pub fn search_url(&self) -> &str {
        &self.0.search_url
    }

    pub fn search_api_key(&self) -> &str {
        &self.0.search_api_key
    }

    pub fn search_collection(&self) -> &str {
        &self.0.search_collection
    }

    pub fn search_query_by(&self) -> &str {
        &self.0.search_query_by
    }

    pub fn search_timeout_secs(&self) -> u64 {
        self.0.search_timeout_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_list_splits_and_trims() {
        std::env::set_var("TEST_ENV_LIST_SPLIT", "pdf, doc ,docx,");
        let parsed = env_list("TEST_ENV_LIST_SPLIT", "");
        assert_eq!(parsed, vec!["pdf", "doc", "docx"]);
        std::env::remove_var("TEST_ENV_LIST_SPLIT");
    }

    #[test]
    fn env_parse_rejects_garbage() {
        std::env::set_var("TEST_ENV_PARSE_BAD", "not-a-number");
        let result: Result<u16> = env_parse("TEST_ENV_PARSE_BAD", 4000);
        assert!(result.is_err());
        std::env::remove_var("TEST_ENV_PARSE_BAD");
    }

    #[test]
    fn env_optional_ignores_blank_values() {
        std::env::set_var("TEST_ENV_OPTIONAL_BLANK", "   ");
        assert_eq!(env_optional("TEST_ENV_OPTIONAL_BLANK"), None);
        std::env::remove_var("TEST_ENV_OPTIONAL_BLANK");
    }
}
