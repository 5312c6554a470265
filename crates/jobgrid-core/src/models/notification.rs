use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    System,
    JobAlert,
    Application,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    #[serde(rename = "read")]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_flag_serializes_as_read() {
        let notification = Notification {
            id: 1,
            user_id: 1,
            kind: NotificationKind::JobAlert,
            title: "t".to_string(),
            body: "b".to_string(),
            is_read: false,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value.get("read"), Some(&serde_json::json!(false)));
        assert_eq!(value.get("kind"), Some(&serde_json::json!("job_alert")));
        assert!(value.get("is_read").is_none());
    }
}
