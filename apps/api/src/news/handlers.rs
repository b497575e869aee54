//! Axum route handler for the news endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::news::feed::Story;
use crate::news::proxy;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub stories: Vec<Story>,
}

/// GET /api/news
///
/// Proxies the upstream feed's current top stories. Any upstream failure maps
/// to a single `FeedUnavailable` response; there is no partial-results mode.
pub async fn handle_news(State(state): State<AppState>) -> Result<Json<NewsResponse>, AppError> {
    let stories = proxy::top_stories(state.feed.as_ref()).await?;
    Ok(Json(NewsResponse { stories }))
}
