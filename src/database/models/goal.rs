use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One savings goal joined to its owner's display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GoalRecord {
    pub id: i32,
    pub name: String,
    pub current_amount: Decimal,
    pub target_amount: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub username: Option<String>,
    pub telegram_id: i64,
}
