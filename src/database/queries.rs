//! The read-model query layer: five fixed, parameterless queries over the
//! tables the bot writes. Each call is a single read-only round trip with no
//! caching, so consecutive calls may observe different states under
//! concurrent bot writes.

use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{
    ActivityRecord, GoalRecord, StatsOverview, TransactionRecord, UserSummary,
};

// Sums are COALESCEd so an empty database reports zeros instead of SQL NULLs.
const STATS_SQL: &str = "
    SELECT
      (SELECT COUNT(*) FROM users) AS total_users,
      (SELECT COUNT(*) FROM goals WHERE is_active = true) AS active_goals,
      (SELECT COUNT(*) FROM goals WHERE is_active = false) AS completed_goals,
      (SELECT COALESCE(SUM(current_amount), 0) FROM goals WHERE is_active = true) AS total_saved,
      (SELECT COALESCE(SUM(target_amount), 0) FROM goals WHERE is_active = true) AS total_target,
      (SELECT COUNT(*) FROM transactions WHERE created_at > NOW() - INTERVAL '24 hours') AS transactions_today
";

const USERS_SQL: &str = "
    SELECT
      u.id, u.telegram_id, u.first_name, u.username, u.created_at,
      COUNT(g.id) AS goals_count,
      COALESCE(SUM(g.current_amount), 0) AS total_saved
    FROM users u
    LEFT JOIN goals g ON u.id = g.user_id AND g.is_active = true
    GROUP BY u.id
    ORDER BY u.created_at DESC
";

const GOALS_SQL: &str = "
    SELECT
      g.id, g.name, g.current_amount, g.target_amount, g.is_active, g.created_at,
      u.first_name, u.username, u.telegram_id
    FROM goals g
    JOIN users u ON g.user_id = u.id
    ORDER BY g.created_at DESC
    LIMIT 100
";

const TRANSACTIONS_SQL: &str = "
    SELECT
      t.id, t.type, t.amount, t.balance_after, t.created_at,
      g.name AS goal_name, u.first_name, u.username
    FROM transactions t
    JOIN goals g ON t.goal_id = g.id
    JOIN users u ON t.user_id = u.id
    ORDER BY t.created_at DESC
    LIMIT 100
";

const ACTIVITY_SQL: &str = "
    SELECT
      al.id, al.action, al.details, al.created_at,
      u.first_name, u.username
    FROM activity_logs al
    JOIN users u ON al.user_id = u.id
    ORDER BY al.created_at DESC
    LIMIT 50
";

pub async fn stats_overview(pool: &PgPool) -> Result<StatsOverview, DatabaseError> {
    Ok(sqlx::query_as::<_, StatsOverview>(STATS_SQL)
        .fetch_one(pool)
        .await?)
}

pub async fn user_summaries(pool: &PgPool) -> Result<Vec<UserSummary>, DatabaseError> {
    Ok(sqlx::query_as::<_, UserSummary>(USERS_SQL)
        .fetch_all(pool)
        .await?)
}

pub async fn goal_records(pool: &PgPool) -> Result<Vec<GoalRecord>, DatabaseError> {
    Ok(sqlx::query_as::<_, GoalRecord>(GOALS_SQL)
        .fetch_all(pool)
        .await?)
}

pub async fn transaction_records(pool: &PgPool) -> Result<Vec<TransactionRecord>, DatabaseError> {
    Ok(sqlx::query_as::<_, TransactionRecord>(TRANSACTIONS_SQL)
        .fetch_all(pool)
        .await?)
}

pub async fn activity_records(pool: &PgPool) -> Result<Vec<ActivityRecord>, DatabaseError> {
    Ok(sqlx::query_as::<_, ActivityRecord>(ACTIVITY_SQL)
        .fetch_all(pool)
        .await?)
}
