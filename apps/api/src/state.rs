use std::sync::Arc;

use crate::analysis::scorer::PersonalityAnalyzer;
use crate::config::Config;
use crate::reddit_client::ContentFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable content source. Default: RedditClient.
    pub fetcher: Arc<dyn ContentFetcher>,
    pub analyzer: PersonalityAnalyzer,
}
