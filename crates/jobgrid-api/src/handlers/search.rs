//! Job search proxied to the search engine.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use jobgrid_core::constants::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use jobgrid_core::models::PaginationMeta;
use jobgrid_search::{JobDocument, JobSearchRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Keyword query. Empty or missing means "match everything".
    pub q: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Results per page, capped at 100.
    pub limit: Option<u32>,
    /// Exact location facet.
    pub location: Option<String>,
    /// Exact employment type facet, e.g. "full-time".
    pub employment_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobSearchResponse {
    pub hits: Vec<JobDocument>,
    pub pagination: PaginationMeta,
}

/// Search the jobs index.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/search",
    tag = "jobs",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = JobSearchResponse),
        (status = 502, description = "Search engine unavailable", body = ErrorResponse),
    )
)]
pub async fn search_jobs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("*")
        .to_string();
    let page = query.page.unwrap_or(1).max(1);
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let request = JobSearchRequest {
        q,
        page,
        per_page: limit,
        location: query.location,
        employment_type: query.employment_type,
    };

    let response = state.search.client.search_jobs(&request).await?;

    // The engine reports the page it actually served; pagination reflects
    // that, not the requested page.
    let pagination = PaginationMeta::from_search(response.found, response.page, limit);
    let hits = response.hits.into_iter().map(|hit| hit.document).collect();

    Ok(Json(JobSearchResponse { hits, pagination }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_deserialize() {
        let query: SearchQuery = serde_json::from_value(serde_json::json!({
            "q": "rust",
            "page": 2,
            "limit": 25,
            "employment_type": "full-time"
        }))
        .unwrap();
        assert_eq!(query.q.as_deref(), Some("rust"));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(25));
        assert_eq!(query.employment_type.as_deref(), Some("full-time"));
    }

    #[test]
    fn all_parameters_are_optional() {
        let query: SearchQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.q, None);
        assert_eq!(query.page, None);
        assert_eq!(query.limit, None);
        assert_eq!(query.location, None);
        assert_eq!(query.employment_type, None);
    }
}
