use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Single-row aggregate snapshot shown on the dashboard header. Sums cover
/// active goals only; the transaction count covers the trailing 24 hours.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatsOverview {
    pub total_users: i64,
    pub active_goals: i64,
    pub completed_goals: i64,
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub transactions_today: i64,
}
