use anyhow::{ensure, Context, Result};

use crate::reddit_client::MAX_FETCH_LIMIT;

/// Reddit script-app credentials. Only the fetcher reads these.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub reddit: RedditCredentials,
    /// Newest submissions and newest comments fetched per user, each.
    pub fetch_limit: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let fetch_limit = std::env::var("FETCH_LIMIT")
            .unwrap_or_else(|_| "50".to_string())
            .parse::<u32>()
            .context("FETCH_LIMIT must be a positive integer")?;
        ensure!(
            (1..=MAX_FETCH_LIMIT).contains(&fetch_limit),
            "FETCH_LIMIT must be between 1 and {MAX_FETCH_LIMIT}, got {fetch_limit}"
        );

        Ok(Config {
            reddit: RedditCredentials {
                client_id: require_env("REDDIT_CLIENT_ID")?,
                client_secret: require_env("REDDIT_CLIENT_SECRET")?,
                user_agent: require_env("REDDIT_USER_AGENT")?,
            },
            fetch_limit,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
