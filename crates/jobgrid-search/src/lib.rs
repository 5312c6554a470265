//! Thin client for the job search engine.
//!
//! Jobs are indexed in an external Typesense-compatible engine; this crate
//! proxies keyword searches to it and deserializes the response envelope.
//! Nothing about jobs is persisted on our side.

pub mod client;
pub mod documents;

pub use client::{JobSearchRequest, SearchClient, SearchConfig, SearchError};
pub use documents::{JobDocument, SearchHit, SearchResponse};
