use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::database::models::GoalRecord;
use crate::database::queries;
use crate::error::ApiError;

/// GET /api/admin/goals - latest 100 goals with owner display fields
pub async fn goals_get() -> Result<Json<Vec<GoalRecord>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let goals = queries::goal_records(&pool).await?;
    Ok(Json(goals))
}
