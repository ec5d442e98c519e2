use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::database::models::StatsOverview;
use crate::database::queries;
use crate::error::ApiError;

/// GET /api/admin/stats - aggregate snapshot for the dashboard header
pub async fn stats_get() -> Result<Json<StatsOverview>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let stats = queries::stats_overview(&pool).await?;
    Ok(Json(stats))
}
