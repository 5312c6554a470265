use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A bookmark pointing at an externally indexed job. Jobs are referenced only
/// by id; nothing about the job itself is stored locally.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedJob {
    pub user_id: i64,
    pub job_id: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let saved = SavedJob {
            user_id: 1,
            job_id: 42,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&saved).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("jobId").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
