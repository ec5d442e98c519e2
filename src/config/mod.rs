use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub telegram: TelegramConfig,
    /// Telegram ids allowed through the admin gate. Parsed once at startup;
    /// immutable for the process lifetime.
    pub admin_ids: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    /// Encrypt the connection without verifying the server certificate.
    /// The managed host the panel shares with the bot presents a certificate
    /// the client cannot validate against a local CA bundle.
    pub tls_without_verification: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub app_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").or_else(|_| env::var("NODE_ENV")).as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        let connect_timeout_secs = env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            environment,
            server: ServerConfig {
                port,
                static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost:5432/savings_bot".to_string()),
                max_connections,
                connect_timeout_secs,
                tls_without_verification: environment == Environment::Production,
            },
            telegram: TelegramConfig {
                bot_token: env::var("ADMIN_BOT_TOKEN").unwrap_or_default(),
                app_url: env::var("ADMIN_APP_URL")
                    .unwrap_or_else(|_| "https://your-admin-app.railway.app".to_string()),
            },
            admin_ids: parse_admin_ids(&env::var("ADMIN_IDS").unwrap_or_default()),
        }
    }
}

/// Parse the comma-separated `ADMIN_IDS` value. Entries that do not parse as
/// an integer are skipped. An empty value falls back to the original deploy's
/// single admin so a bare `.env` still yields a working gate.
fn parse_admin_ids(raw: &str) -> Vec<i64> {
    let ids: Vec<i64> = raw
        .split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect();

    if ids.is_empty() {
        vec![120962578]
    } else {
        ids
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
