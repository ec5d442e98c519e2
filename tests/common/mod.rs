use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

/// Telegram id the test server is configured to accept as admin.
pub const ADMIN_ID: i64 = 120962578;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/kopilka-admin-api");
        cmd.env("PORT", port.to_string())
            // Pin the gate inputs the assertions depend on
            .env("ADMIN_IDS", ADMIN_ID.to_string())
            .env("ADMIN_APP_URL", "https://panel.example.app")
            .env("ADMIN_BOT_TOKEN", "")
            .env("DATABASE_CONNECT_TIMEOUT", "5")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit the rest of the environment so the server sees DATABASE_URL
        // when one is configured; the auth and webhook assertions hold either way
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            match client.get(&url).send().await {
                Ok(resp) => {
                    // Consider server ready on any non-404 response
                    if resp.status() == StatusCode::OK
                        || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                    {
                        return Ok(());
                    }
                }
                Err(_) => {}
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    // Use stable get_or_init and convert init errors into a panic with context.
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Build an `x-telegram-init-data` header value around the given `user` JSON.
#[allow(dead_code)]
pub fn init_data_for(user_json: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("query_id", "AAH4x1kHAAAAAPjHWQdJzIph")
        .append_pair("user", user_json)
        .append_pair("auth_date", "1700000000")
        .append_pair("hash", "deadbeef")
        .finish()
}

/// Header name the admin gate reads.
#[allow(dead_code)]
pub const INIT_DATA_HEADER: &str = "x-telegram-init-data";
