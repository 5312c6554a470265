//! Wire types for the search engine's document search endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A job as indexed in the search engine. The engine owns this data; we only
/// pass it through. `id` is the engine's string form of the numeric job id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobDocument {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    /// Unix timestamp (seconds) the job was posted, used for sorting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<i64>,
}

/// One hit in a search response. The engine wraps each document together with
/// highlight data we do not use.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit<T> {
    pub document: T,
}

/// Envelope of a document search response. `found` is the total number of
/// matches across all pages; `page` is the page the engine actually served.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse<T> {
    pub found: u64,
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub hits: Vec<SearchHit<T>>,
    #[serde(default)]
    pub search_time_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_engine_response_envelope() {
        let raw = serde_json::json!({
            "found": 95,
            "page": 1,
            "search_time_ms": 3,
            "hits": [
                {
                    "document": {
                        "id": "1042",
                        "title": "Backend Engineer",
                        "company": "Acme",
                        "location": "Berlin",
                        "employment_type": "full-time",
                        "salary_min": 70000,
                        "salary_max": 95000
                    },
                    "highlights": [{"field": "title", "snippet": "<mark>Backend</mark>"}],
                    "text_match": 578730
                }
            ]
        });

        let response: SearchResponse<JobDocument> = serde_json::from_value(raw).unwrap();
        assert_eq!(response.found, 95);
        assert_eq!(response.page, 1);
        assert_eq!(response.hits.len(), 1);
        let job = &response.hits[0].document;
        assert_eq!(job.id, "1042");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.salary_max, Some(95_000));
        assert_eq!(job.remote, None);
    }

    #[test]
    fn missing_hits_defaults_to_empty() {
        let raw = serde_json::json!({ "found": 0, "page": 1 });
        let response: SearchResponse<JobDocument> = serde_json::from_value(raw).unwrap();
        assert!(response.hits.is_empty());
        assert_eq!(response.search_time_ms, None);
    }
}
