use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::ApiError;

/// Identity asserted by a caller, as carried in the `user` field of Telegram
/// WebApp init data. Only callers on the allow-list ever become an
/// `AdminUser`; the struct doubles as the `/api/admin/me` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// The static admin allow-list. Cheap to clone; shared between the HTTP
/// middleware and the webhook handler so both sides gate against the same
/// set. Constructed once from config and injected, never read from a global.
#[derive(Debug, Clone)]
pub struct AdminIds(Arc<HashSet<i64>>);

impl AdminIds {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(Arc::new(ids.into_iter().collect()))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }
}

/// Run the identity gate over an `x-telegram-init-data` header value.
///
/// Missing header and unparseable header are both authentication failures
/// (401); a header that parses to an id outside the allow-list is an
/// authorization failure (403). The init data `hash` field is NOT verified
/// against the bot token, so the asserted identity is trusted as presented
/// by the transport.
pub fn authorize_init_data(
    init_data: Option<&str>,
    admins: &AdminIds,
) -> Result<AdminUser, ApiError> {
    let raw = init_data.ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let user = parse_init_data_user(raw)
        .ok_or_else(|| ApiError::unauthorized("Invalid authorization data"))?;

    if !admins.contains(user.id) {
        return Err(ApiError::forbidden("Access denied. Admin rights required."));
    }

    Ok(user)
}

/// Init data is a URL-encoded field list (`query_id=...&user=%7B...%7D&...`);
/// the `user` field holds a JSON object. Returns None when the field is
/// absent or its JSON does not describe a user with a numeric id.
fn parse_init_data_user(raw: &str) -> Option<AdminUser> {
    let user_json = url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value.into_owned())?;

    serde_json::from_str(&user_json).ok()
}
