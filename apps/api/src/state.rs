use std::sync::Arc;

use crate::news::feed::StoryFeed;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The skill and roadmap catalogs are compile-time constants and need no
/// state; only the pluggable story feed lives here.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable story feed. Default: `HackerNewsFeed` against the public API.
    pub feed: Arc<dyn StoryFeed>,
}
