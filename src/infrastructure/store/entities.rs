use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of `invite_codes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteCode {
    pub code: String,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

impl InviteCode {
    pub fn new(code: String) -> Self {
        Self {
            code,
            is_used: false,
            created_at: Utc::now(),
        }
    }
}

/// Projection of `profiles` with only the `name` column selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileName {
    #[serde(default)]
    pub name: Option<String>,
}
