use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

/// Account flavor chosen at registration. Drives onboarding and, later on,
/// which side of the board the user acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "account_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    User,
    Employer,
}

impl Display for AccountType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AccountType::User => write!(f, "user"),
            AccountType::Employer => write!(f, "employer"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(AccountType::User),
            "employer" => Ok(AccountType::Employer),
            other => Err(format!("Unknown account type: {}", other)),
        }
    }
}

/// Profile row, one per user. Upload slots store the opaque storage key plus
/// the original file name; the key never leaves the backend.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub account_type: AccountType,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub resume_key: Option<String>,
    pub resume_file_name: Option<String>,
    pub cover_letter_key: Option<String>,
    pub cover_letter_file_name: Option<String>,
    pub profile_image_key: Option<String>,
    pub profile_image_file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable profile fields. `account_type` is `None` when the caller leaves
/// it unchanged.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub account_type: Option<AccountType>,
    pub headline: Option<String>,
    pub location: Option<String>,
}
