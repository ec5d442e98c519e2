use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod types;

use types::InlineKeyboardMarkup;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Bot token is not configured")]
    MissingToken,

    #[error("Telegram API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API rejected the request: {0}")]
    Api(String),
}

/// Minimal Telegram Bot API client. The admin bot only ever sends messages,
/// so that is the only method.
#[derive(Debug, Clone)]
pub struct BotApi {
    client: reqwest::Client,
    token: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl BotApi {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
        }
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<(), TelegramError> {
        if self.token.is_empty() {
            return Err(TelegramError::MissingToken);
        }

        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let request = SendMessageRequest {
            chat_id,
            text,
            reply_markup,
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let body: BotApiResponse = response.json().await?;

        if !body.ok {
            return Err(TelegramError::Api(
                body.description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_token_fails_before_any_request() {
        let api = BotApi::new("");
        let err = api.send_message(1, "hi", None).await.unwrap_err();
        assert!(matches!(err, TelegramError::MissingToken));
    }

    #[test]
    fn request_omits_markup_when_absent() {
        let request = SendMessageRequest {
            chat_id: 7,
            text: "hello",
            reply_markup: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "chat_id": 7, "text": "hello" }));
    }
}
