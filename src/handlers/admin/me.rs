use axum::{Extension, Json};

use crate::auth::AdminUser;

/// GET /api/admin/me - the identity the gate extracted from the request.
/// The frontend calls this first to confirm authorization and greet the
/// admin by name.
pub async fn me_get(Extension(admin): Extension<AdminUser>) -> Json<AdminUser> {
    Json(admin)
}
