use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::database::models::UserSummary;
use crate::database::queries;
use crate::error::ApiError;

/// GET /api/admin/users - every user with their active-goal aggregates,
/// newest first
pub async fn users_get() -> Result<Json<Vec<UserSummary>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let users = queries::user_summaries(&pool).await?;
    Ok(Json(users))
}
