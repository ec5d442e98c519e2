use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::database::models::ActivityRecord;
use crate::database::queries;
use crate::error::ApiError;

/// GET /api/admin/activity - latest 50 activity-log entries
pub async fn activity_get() -> Result<Json<Vec<ActivityRecord>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let activity = queries::activity_records(&pool).await?;
    Ok(Json(activity))
}
