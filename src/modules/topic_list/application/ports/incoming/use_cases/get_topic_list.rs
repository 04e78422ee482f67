use async_trait::async_trait;

use crate::auth::application::domain::entities::Requester;
use crate::shared::web::QueryParams;
use crate::topic_list::application::domain::TopicListPage;
use crate::topic_list::application::ports::outgoing::{
    CategoryQueryError, FeedTokenError, PrivilegeQueryError, SortedTopicProviderError,
    UserSettingsQueryError,
};

//
// ──────────────────────────────────────────────────────────
// Input DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct TopicListRequest {
    pub requester: Requester,
    /// Path and query as received, used to tell the home page apart from the
    /// page's own route.
    pub original_url: String,
    pub query: QueryParams,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetTopicListError {
    #[error("User settings unavailable: {0}")]
    SettingsUnavailable(String),

    #[error("Category lookup failed: {0}")]
    CategoryLookupFailed(String),

    #[error("Feed token unavailable: {0}")]
    FeedTokenUnavailable(String),

    #[error("Privilege check failed: {0}")]
    PrivilegeCheckFailed(String),

    #[error("Topic retrieval failed: {0}")]
    RetrievalFailed(String),
}

impl From<UserSettingsQueryError> for GetTopicListError {
    fn from(err: UserSettingsQueryError) -> Self {
        match err {
            UserSettingsQueryError::DatabaseError(msg) => Self::SettingsUnavailable(msg),
        }
    }
}

impl From<CategoryQueryError> for GetTopicListError {
    fn from(err: CategoryQueryError) -> Self {
        match err {
            CategoryQueryError::DatabaseError(msg) => Self::CategoryLookupFailed(msg),
        }
    }
}

impl From<FeedTokenError> for GetTopicListError {
    fn from(err: FeedTokenError) -> Self {
        match err {
            FeedTokenError::StoreUnavailable(msg) => Self::FeedTokenUnavailable(msg),
        }
    }
}

impl From<PrivilegeQueryError> for GetTopicListError {
    fn from(err: PrivilegeQueryError) -> Self {
        match err {
            PrivilegeQueryError::DatabaseError(msg) => Self::PrivilegeCheckFailed(msg),
        }
    }
}

impl From<SortedTopicProviderError> for GetTopicListError {
    fn from(err: SortedTopicProviderError) -> Self {
        match err {
            SortedTopicProviderError::DatabaseError(msg) => Self::RetrievalFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetTopicListUseCase: Send + Sync {
    /// `Ok(None)` means the request names no valid listing (unknown term).
    async fn execute(
        &self,
        request: TopicListRequest,
    ) -> Result<Option<TopicListPage>, GetTopicListError>;
}
