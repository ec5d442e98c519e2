use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One activity-log entry joined to its user's display fields. `details` is
/// the bot's free-form JSONB payload and varies by action.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityRecord {
    pub id: i32,
    pub action: String,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub username: Option<String>,
}
