use anyhow::{Context, Result};

/// Default upstream story feed. Overridable so tests can point at a mock server.
pub const DEFAULT_FEED_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup only fails on an unparseable PORT.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub feed_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            feed_base_url: std::env::var("FEED_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_BASE_URL.to_string()),
        })
    }
}
