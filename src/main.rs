use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use kopilka_admin_api::auth::AdminIds;
use kopilka_admin_api::bot::AdminBot;
use kopilka_admin_api::config;
use kopilka_admin_api::database::manager::DatabaseManager;
use kopilka_admin_api::handlers;
use kopilka_admin_api::middleware::require_admin;
use kopilka_admin_api::telegram::BotApi;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, ADMIN_IDS, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Kopilka admin panel in {:?} mode", config.environment);
    tracing::info!("Authorized admins: {:?}", config.admin_ids);

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Admin panel running on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let config = config::config();
    let admins = AdminIds::new(config.admin_ids.iter().copied());

    let bot = Arc::new(AdminBot::new(
        BotApi::new(config.telegram.bot_token.clone()),
        config.telegram.app_url.clone(),
        admins.clone(),
    ));

    // The panel frontend is a static bundle; any path that is not an API
    // route falls through to it.
    let static_pages = ServeDir::new(&config.server.static_dir).fallback(ServeFile::new(
        format!("{}/index.html", config.server.static_dir),
    ));

    Router::new()
        .route("/health", get(health))
        .merge(admin_routes(admins))
        .merge(webhook_routes(bot))
        .fallback_service(static_pages)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn admin_routes(admins: AdminIds) -> Router {
    use handlers::admin;

    Router::new()
        .route("/api/admin/stats", get(admin::stats_get))
        .route("/api/admin/users", get(admin::users_get))
        .route("/api/admin/goals", get(admin::goals_get))
        .route("/api/admin/transactions", get(admin::transactions_get))
        .route("/api/admin/activity", get(admin::activity_get))
        .route("/api/admin/me", get(admin::me_get))
        // The gate runs before any handler; a failed gate never reaches the
        // database.
        .layer(from_fn_with_state(admins, require_admin))
}

fn webhook_routes(bot: Arc<AdminBot>) -> Router {
    Router::new()
        .route("/admin-webhook", post(handlers::webhook::webhook_post))
        .with_state(bot)
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
