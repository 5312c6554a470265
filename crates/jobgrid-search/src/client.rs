//! HTTP client for the search engine.

use crate::documents::{JobDocument, SearchResponse};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search engine returned {status}: {body}")]
    Engine { status: u16, body: String },

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),

    #[error("Search configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    pub api_key: String,
    pub collection: String,
    /// Comma-separated document fields keyword queries run against.
    pub query_by: String,
    pub timeout: Duration,
}

/// Parameters for one job search. `page` and `per_page` are already clamped
/// by the caller.
#[derive(Debug, Clone)]
pub struct JobSearchRequest {
    pub q: String,
    pub page: u32,
    pub per_page: u32,
    pub location: Option<String>,
    pub employment_type: Option<String>,
}

impl JobSearchRequest {
    /// Build the engine's `filter_by` expression from the optional facets.
    /// Values are wrapped in backticks so spaces survive; backticks inside
    /// values are stripped since they cannot be escaped.
    fn filter_by(&self) -> Option<String> {
        let mut clauses = Vec::new();
        if let Some(location) = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            clauses.push(format!("location:=`{}`", location.replace('`', "")));
        }
        if let Some(employment_type) = self
            .employment_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            clauses.push(format!(
                "employment_type:=`{}`",
                employment_type.replace('`', "")
            ));
        }
        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" && "))
        }
    }
}

/// Client for the job search engine. Cheap to clone; the underlying HTTP
/// client is shared.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: Arc<SearchConfig>,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        if config.base_url.trim().is_empty() {
            return Err(SearchError::Config("Search base URL is empty".to_string()));
        }
        if config.collection.trim().is_empty() {
            return Err(SearchError::Config(
                "Search collection name is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(SearchClient {
            http,
            config: Arc::new(config),
        })
    }

    /// Run a keyword search against the jobs collection.
    #[tracing::instrument(skip(self), fields(collection = %self.config.collection))]
    pub async fn search_jobs(
        &self,
        request: &JobSearchRequest,
    ) -> Result<SearchResponse<JobDocument>, SearchError> {
        let url = format!(
            "{}/collections/{}/documents/search",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        );

        let mut params: Vec<(&str, String)> = vec![
            ("q", request.q.clone()),
            ("query_by", self.config.query_by.clone()),
            ("page", request.page.to_string()),
            ("per_page", request.per_page.to_string()),
        ];
        if let Some(filter) = request.filter_by() {
            params.push(("filter_by", filter));
        }

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "Search engine rejected query");
            return Err(SearchError::Engine {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SearchResponse<JobDocument>>()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }

    /// Probe the engine's health endpoint.
    pub async fn health(&self) -> Result<(), SearchError> {
        let url = format!("{}/health", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SearchError::Engine {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> JobSearchRequest {
        JobSearchRequest {
            q: "rust".to_string(),
            page: 1,
            per_page: 10,
            location: None,
            employment_type: None,
        }
    }

    #[test]
    fn filter_by_is_absent_without_facets() {
        assert_eq!(request().filter_by(), None);
    }

    #[test]
    fn filter_by_combines_facets() {
        let mut req = request();
        req.location = Some("New York".to_string());
        req.employment_type = Some("full-time".to_string());
        assert_eq!(
            req.filter_by().unwrap(),
            "location:=`New York` && employment_type:=`full-time`"
        );
    }

    #[test]
    fn filter_by_ignores_blank_and_strips_backticks() {
        let mut req = request();
        req.location = Some("   ".to_string());
        req.employment_type = Some("full`time".to_string());
        assert_eq!(req.filter_by().unwrap(), "employment_type:=`fulltime`");
    }

    #[test]
    fn client_rejects_empty_base_url() {
        let config = SearchConfig {
            base_url: "".to_string(),
            api_key: "k".to_string(),
            collection: "jobs".to_string(),
            query_by: "title".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert!(matches!(
            SearchClient::new(config),
            Err(SearchError::Config(_))
        ));
    }
}
