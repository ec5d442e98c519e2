use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{authorize_init_data, AdminIds};
use crate::error::ApiError;

/// Header carrying the Telegram WebApp init data from the panel frontend.
pub const INIT_DATA_HEADER: &str = "x-telegram-init-data";

/// Admin gate middleware: validates the init-data header against the
/// allow-list and injects the resulting `AdminUser` into request extensions.
/// A failed gate short-circuits before any handler or query executes.
pub async fn require_admin(
    State(admins): State<AdminIds>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let init_data = headers
        .get(INIT_DATA_HEADER)
        .and_then(|value| value.to_str().ok());

    let admin = authorize_init_data(init_data, &admins)?;
    request.extensions_mut().insert(admin);

    Ok(next.run(request).await)
}
