use std::sync::Arc;

use crate::auth::application::domain::entities::Requester;
use crate::topic_list::application::domain::{CategorySelection, TagSelection, UserSettings};
use crate::topic_list::application::ports::incoming::use_cases::GetTopicListError;
use crate::topic_list::application::ports::outgoing::{
    CategoryQuery, FeedTokenStore, PrivilegeQuery, SortedTopicProvider, UserSettingsQuery,
};

/// Collaborators shared by every listing page.
#[derive(Clone)]
pub struct TopicListPorts {
    pub settings: Arc<dyn UserSettingsQuery + Send + Sync>,
    pub categories: Arc<dyn CategoryQuery + Send + Sync>,
    pub feed_tokens: Arc<dyn FeedTokenStore + Send + Sync>,
    pub privileges: Arc<dyn PrivilegeQuery + Send + Sync>,
    pub topics: Arc<dyn SortedTopicProvider + Send + Sync>,
}

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub settings: UserSettings,
    pub categories: CategorySelection,
    pub tags: TagSelection,
    pub feed_token: Option<String>,
    pub can_post: bool,
    pub is_privileged: bool,
}

/// Fetches everything the listing needs about the requester at once. The
/// first failure aborts the rest.
pub async fn gather_context(
    ports: &TopicListPorts,
    requester: Requester,
    cids: Vec<i64>,
    tags: &[String],
) -> Result<RequestContext, GetTopicListError> {
    let uid = requester.uid;

    let settings = async {
        ports
            .settings
            .get_settings(uid)
            .await
            .map_err(GetTopicListError::from)
    };

    let categories = async {
        if cids.is_empty() {
            return Ok(CategorySelection::all());
        }
        ports
            .categories
            .get_categories(cids)
            .await
            .map(CategorySelection::from_categories)
            .map_err(GetTopicListError::from)
    };

    let feed_token = async {
        if !requester.is_logged_in() {
            return Ok(None);
        }
        ports
            .feed_tokens
            .get_or_create_token(uid)
            .await
            .map_err(GetTopicListError::from)
    };

    let can_post = async {
        ports
            .privileges
            .can_create_topics(uid)
            .await
            .map_err(GetTopicListError::from)
    };

    let is_privileged = async {
        ports
            .privileges
            .is_privileged(uid)
            .await
            .map_err(GetTopicListError::from)
    };

    let (settings, categories, feed_token, can_post, is_privileged) =
        tokio::try_join!(settings, categories, feed_token, can_post, is_privileged)?;

    Ok(RequestContext {
        settings,
        categories,
        tags: TagSelection::from_raw(tags),
        feed_token,
        can_post,
        is_privileged,
    })
}
