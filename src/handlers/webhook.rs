use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::warn;

use crate::bot::AdminBot;
use crate::telegram::types::Update;

/// POST /admin-webhook - Telegram update envelope.
///
/// The acknowledgment is unconditional: business handling runs on its own
/// task and malformed payloads are only logged, so the transport always sees
/// 200 and never re-delivers an update because of our internal failures.
pub async fn webhook_post(
    State(bot): State<Arc<AdminBot>>,
    payload: Result<Json<Update>, JsonRejection>,
) -> StatusCode {
    match payload {
        Ok(Json(update)) => {
            if let Some(message) = update.message {
                tokio::spawn(async move {
                    bot.handle_message(&message).await;
                });
            }
        }
        Err(rejection) => {
            warn!("Discarding malformed webhook payload: {}", rejection);
        }
    }

    StatusCode::OK
}
