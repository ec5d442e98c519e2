use axum::Json;

use crate::database::manager::DatabaseManager;
use crate::database::models::TransactionRecord;
use crate::database::queries;
use crate::error::ApiError;

/// GET /api/admin/transactions - latest 100 deposits/withdrawals with goal
/// and owner context
pub async fn transactions_get() -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let transactions = queries::transaction_records(&pool).await?;
    Ok(Json(transactions))
}
