//! Story Feed — the single point of entry for upstream news fetches.
//!
//! ARCHITECTURAL RULE: no other module may call the upstream feed directly.
//! Handlers depend on the `StoryFeed` trait carried in `AppState`, so tests
//! and future backends can swap the concrete Hacker News client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Bound on each upstream request; the public feed enforces none of its own.
const FEED_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned status {status} for {url}")]
    Status { status: u16, url: String },
}

/// A story as served to clients: a 7-field projection of the upstream item.
/// Extra upstream fields (kids, descendants, ...) are dropped on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub score: u32,
    pub time: u64,
    #[serde(rename = "type")]
    pub story_type: String,
    pub by: String,
}

/// The upstream story feed: an ordered top-story index plus per-ID detail.
#[async_trait]
pub trait StoryFeed: Send + Sync {
    /// Identifiers of the feed's current top stories, in ranking order.
    async fn top_story_ids(&self) -> Result<Vec<u64>, FeedError>;

    /// Detail for a single story.
    async fn item(&self, id: u64) -> Result<Story, FeedError>;
}

/// Hacker News client. Every invocation re-fetches; nothing is cached.
pub struct HackerNewsFeed {
    client: Client,
    base_url: String,
}

impl HackerNewsFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(FEED_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FeedError> {
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StoryFeed for HackerNewsFeed {
    async fn top_story_ids(&self) -> Result<Vec<u64>, FeedError> {
        self.get_json(format!("{}/topstories.json", self.base_url))
            .await
    }

    async fn item(&self, id: u64) -> Result<Story, FeedError> {
        self.get_json(format!("{}/item/{id}.json", self.base_url))
            .await
    }
}
