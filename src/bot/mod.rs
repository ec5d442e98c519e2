//! Admin bot conversation logic. The bot is stateless: every inbound message
//! is gated against the allow-list and answered (or ignored) on its own,
//! with no memory between messages.

use tracing::{error, info};

use crate::auth::AdminIds;
use crate::telegram::types::{InlineKeyboardMarkup, Message};
use crate::telegram::BotApi;

const DENIED_TEXT: &str = "🚫 У вас нет прав администратора";
const PANEL_BUTTON_TEXT: &str = "🔧 Открыть админ панель";
const PROMPT_TEXT: &str = "Используйте кнопку ниже для доступа к админ панели:";

/// A reply the bot decided to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

pub struct AdminBot {
    api: BotApi,
    panel_url: String,
    admins: AdminIds,
}

impl AdminBot {
    pub fn new(api: BotApi, panel_url: impl Into<String>, admins: AdminIds) -> Self {
        Self {
            api,
            panel_url: panel_url.into(),
            admins,
        }
    }

    /// Handle one inbound message end to end. Send failures are logged and
    /// swallowed; the webhook acknowledgment does not depend on them.
    pub async fn handle_message(&self, message: &Message) {
        let Some(reply) = plan_reply(message, &self.admins, &self.panel_url) else {
            return;
        };

        if let Err(err) = self
            .api
            .send_message(reply.chat_id, &reply.text, reply.keyboard.as_ref())
            .await
        {
            error!("Failed to send admin bot reply: {}", err);
        }
    }
}

/// Decide what, if anything, to reply. Pure over its inputs so the decision
/// table is testable without the Bot API.
pub fn plan_reply(message: &Message, admins: &AdminIds, panel_url: &str) -> Option<OutboundReply> {
    let chat_id = message.chat.id;
    let from = message.from.as_ref()?;

    info!(
        "Admin bot message from {} ({})",
        from.id,
        from.first_name.as_deref().unwrap_or("-")
    );

    if !admins.contains(from.id) {
        return Some(OutboundReply {
            chat_id,
            text: DENIED_TEXT.to_string(),
            keyboard: None,
        });
    }

    let text = message.text.as_deref()?;
    let first_name = from.first_name.as_deref().unwrap_or("Админ");

    if text == "/start" {
        Some(welcome_reply(chat_id, first_name, panel_url))
    } else if !text.starts_with('/') {
        Some(prompt_reply(chat_id, panel_url))
    } else {
        // Other commands fall through without acknowledgment.
        None
    }
}

fn panel_keyboard(panel_url: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::web_app_button(PANEL_BUTTON_TEXT, panel_url)
}

fn welcome_reply(chat_id: i64, first_name: &str, panel_url: &str) -> OutboundReply {
    if panel_url.starts_with("https://") {
        OutboundReply {
            chat_id,
            text: format!(
                "Добро пожаловать в админ панель, {}! 👨‍💼\n\n🔧 Управляйте системой \"Копилка\"\n📊 Просматривайте статистику\n👥 Мониторьте пользователей\n\nНажмите кнопку ниже для доступа:",
                first_name
            ),
            keyboard: Some(panel_keyboard(panel_url)),
        }
    } else {
        // Telegram refuses web_app buttons on plain-http addresses, so fall
        // back to a bare link and say why there is no button.
        OutboundReply {
            chat_id,
            text: format!(
                "Админ панель готова! 🔧\n\n📱 Интерфейс: {}\n\n⚠️ Для Mini App нужен HTTPS домен.",
                panel_url
            ),
            keyboard: None,
        }
    }
}

fn prompt_reply(chat_id: i64, panel_url: &str) -> OutboundReply {
    if panel_url.starts_with("https://") {
        OutboundReply {
            chat_id,
            text: PROMPT_TEXT.to_string(),
            keyboard: Some(panel_keyboard(panel_url)),
        }
    } else {
        OutboundReply {
            chat_id,
            text: format!(
                "🔧 Админ панель: {}\n\n⚠️ Для Mini App нужен HTTPS домен.",
                panel_url
            ),
            keyboard: None,
        }
    }
}
