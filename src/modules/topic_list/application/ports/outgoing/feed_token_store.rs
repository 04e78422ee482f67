use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedTokenError {
    #[error("Feed token store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Per-user secret appended to private RSS feed links.
#[async_trait]
pub trait FeedTokenStore: Send + Sync {
    /// `None` for guests.
    async fn get_or_create_token(&self, uid: UserId) -> Result<Option<String>, FeedTokenError>;
}
