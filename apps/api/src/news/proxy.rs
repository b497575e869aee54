//! Top-stories proxy — selects the first N ranked IDs and fetches their
//! details concurrently, reassembling results in ranking order.

use futures::future::try_join_all;

use crate::news::feed::{FeedError, Story, StoryFeed};

/// How many ranked stories each request serves.
pub const TOP_STORY_COUNT: usize = 5;

/// Fetches the feed's current top stories.
///
/// Join semantics are fail-fast: the first failing detail fetch fails the
/// whole batch and drops the remaining in-flight requests. No retries, no
/// partial results. Result order follows the feed's ranking, not completion
/// order.
pub async fn top_stories(feed: &dyn StoryFeed) -> Result<Vec<Story>, FeedError> {
    let ids = feed.top_story_ids().await?;
    let fetches = ids
        .into_iter()
        .take(TOP_STORY_COUNT)
        .map(|id| feed.item(id));
    try_join_all(fetches).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// In-memory feed: serves a fixed ID list and synthesizes items, with
    /// switches to fail the index fetch or one specific item fetch.
    struct StubFeed {
        ids: Vec<u64>,
        fail_index: bool,
        failing_id: Option<u64>,
    }

    impl StubFeed {
        fn with_ids(ids: Vec<u64>) -> Self {
            StubFeed {
                ids,
                fail_index: false,
                failing_id: None,
            }
        }
    }

    fn stub_story(id: u64) -> Story {
        Story {
            id,
            title: format!("Story {id}"),
            url: Some(format!("https://example.com/{id}")),
            score: 100 + id as u32,
            time: 1_700_000_000 + id,
            story_type: "story".to_string(),
            by: format!("author{id}"),
        }
    }

    #[async_trait]
    impl StoryFeed for StubFeed {
        async fn top_story_ids(&self) -> Result<Vec<u64>, FeedError> {
            if self.fail_index {
                return Err(FeedError::Status {
                    status: 503,
                    url: "stub/topstories.json".to_string(),
                });
            }
            Ok(self.ids.clone())
        }

        async fn item(&self, id: u64) -> Result<Story, FeedError> {
            if self.failing_id == Some(id) {
                return Err(FeedError::Status {
                    status: 500,
                    url: format!("stub/item/{id}.json"),
                });
            }
            Ok(stub_story(id))
        }
    }

    #[tokio::test]
    async fn test_takes_first_five_ids_in_ranking_order() {
        let feed = StubFeed::with_ids(vec![31, 7, 99, 2, 54, 11, 88]);
        let stories = top_stories(&feed).await.unwrap();
        let ids: Vec<u64> = stories.iter().map(|s| s.id).collect();
        assert_eq!(ids, [31, 7, 99, 2, 54]);
    }

    #[tokio::test]
    async fn test_short_index_returns_all_available() {
        let feed = StubFeed::with_ids(vec![1, 2]);
        let stories = top_stories(&feed).await.unwrap();
        assert_eq!(stories.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_index_returns_empty_batch() {
        let feed = StubFeed::with_ids(vec![]);
        let stories = top_stories(&feed).await.unwrap();
        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_index_failure_aborts_the_batch() {
        let mut feed = StubFeed::with_ids(vec![1, 2, 3]);
        feed.fail_index = true;
        assert!(top_stories(&feed).await.is_err());
    }

    #[tokio::test]
    async fn test_single_detail_failure_aborts_the_batch() {
        let mut feed = StubFeed::with_ids(vec![1, 2, 3, 4, 5]);
        feed.failing_id = Some(3);
        assert!(top_stories(&feed).await.is_err());
    }
}
