//! Reddit client: the only module that talks to the Reddit API.
//!
//! Uses app-only OAuth (client credentials) and reads a user's newest
//! submissions and comments. No retries: any upstream failure ends the request.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::RedditCredentials;
use crate::models::text_item::TextItem;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";
/// Refresh the token this long before Reddit says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Reddit listings return at most 100 children per page.
pub const MAX_FETCH_LIMIT: u32 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Access to user '{0}' is forbidden (suspended or private)")]
    Forbidden(String),

    #[error("Reddit authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited by Reddit")]
    RateLimited,

    #[error("Reddit API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse Reddit response: {0}")]
    Parse(String),
}

/// Source of user-authored text. `AppState` carries an `Arc<dyn ContentFetcher>`
/// so handlers never depend on Reddit directly.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, username: &str) -> Result<Vec<TextItem>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<ListingChild<T>>,
}

#[derive(Debug, Deserialize)]
struct ListingChild<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct SubmissionData {
    title: String,
    #[serde(default)]
    selftext: String,
    score: i64,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    body: String,
    score: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

#[derive(Clone)]
pub struct RedditClient {
    client: Client,
    credentials: RedditCredentials,
    fetch_limit: u32,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials, fetch_limit: u32) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&credentials.user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            credentials,
            fetch_limit: fetch_limit.clamp(1, MAX_FETCH_LIMIT),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Returns a cached bearer token, requesting a new one when missing or near expiry.
    async fn access_token(&self) -> Result<String, FetchError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        debug!("Requesting new Reddit access token");
        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Reddit token endpoint returned {}: {}", status, body);
            return Err(FetchError::Authentication(format!("status {status}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(token.access_token)
    }

    /// Drops the cached token so the next request asks for a fresh one.
    async fn invalidate_token(&self) {
        if self.token.lock().await.take().is_some() {
            debug!("Discarded rejected Reddit access token");
        }
    }

    /// Maps a failed listing response to an error. A 401 means the cached
    /// token is no longer accepted, so it is discarded before returning.
    async fn rejected_listing(
        &self,
        status: StatusCode,
        username: &str,
        body: String,
    ) -> FetchError {
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_token().await;
        }
        status_error(status, username, body)
    }

    async fn get_listing<T: serde::de::DeserializeOwned>(
        &self,
        username: &str,
        section: &str,
    ) -> Result<Vec<T>, FetchError> {
        let token = self.access_token().await?;
        let url = format!("{API_BASE}/user/{username}/{section}");
        let limit = self.fetch_limit.to_string();

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("sort", "new"), ("limit", limit.as_str()), ("raw_json", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Reddit returned {} for {}: {}", status, url, body);
            return Err(self.rejected_listing(status, username, body).await);
        }

        let body = response.text().await?;
        parse_listing(&body)
    }
}

#[async_trait]
impl ContentFetcher for RedditClient {
    async fn fetch(&self, username: &str) -> Result<Vec<TextItem>, FetchError> {
        let username = normalize_username(username)?;

        let submissions: Vec<SubmissionData> = self.get_listing(username, "submitted").await?;
        let comments: Vec<CommentData> = self.get_listing(username, "comments").await?;

        info!(
            "Fetched {} submissions and {} comments for u/{}",
            submissions.len(),
            comments.len(),
            username
        );

        let items = submissions
            .into_iter()
            .map(|s| TextItem::submission(&s.title, &s.selftext, s.score))
            .chain(comments.into_iter().map(|c| TextItem::comment(c.body, c.score)))
            .collect();

        Ok(items)
    }
}

/// Strips an optional `u/` or `/u/` prefix and checks Reddit's username rules:
/// 3 to 20 characters of ASCII letters, digits, `_` or `-`.
pub fn normalize_username(raw: &str) -> Result<&str, FetchError> {
    let trimmed = raw.trim();
    let name = trimmed
        .strip_prefix("/u/")
        .or_else(|| trimmed.strip_prefix("u/"))
        .unwrap_or(trimmed);

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !(3..=20).contains(&name.len()) || !valid_chars {
        return Err(FetchError::InvalidUsername(trimmed.to_string()));
    }

    Ok(name)
}

fn status_error(status: StatusCode, username: &str, body: String) -> FetchError {
    match status.as_u16() {
        401 => FetchError::Authentication("access token rejected".to_string()),
        403 => FetchError::Forbidden(username.to_string()),
        404 => FetchError::UserNotFound(username.to_string()),
        429 => FetchError::RateLimited,
        code => FetchError::Api {
            status: code,
            message: body,
        },
    }
}

fn parse_listing<T: serde::de::DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let listing: Listing<T> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(listing.data.children.into_iter().map(|c| c.data).collect())
}
