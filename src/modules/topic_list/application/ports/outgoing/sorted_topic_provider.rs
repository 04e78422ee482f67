use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::topic_list::application::domain::TopicQuery;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub tid: i64,
    pub cid: i64,
    pub uid: i64,
    pub title: String,
    pub slug: String,
    pub post_count: i64,
    pub view_count: i64,
    pub votes: i64,
    pub pinned: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_posted_at: DateTime<Utc>,
}

/// One window of an ordered topic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedTopics {
    /// Size of the whole listing, not of this window.
    pub topic_count: u64,
    pub topics: Vec<TopicSummary>,
    pub next_start: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortedTopicProviderError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SortedTopicProvider: Send + Sync {
    /// Returns the `[start, stop]` window of topics matching `query`, ordered
    /// by `query.sort`.
    async fn get_sorted_topics(
        &self,
        query: TopicQuery,
    ) -> Result<SortedTopics, SortedTopicProviderError>;
}
