use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One bot user with their active-goal aggregates folded in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i32,
    pub telegram_id: i64,
    pub first_name: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub goals_count: i64,
    pub total_saved: Decimal,
}
