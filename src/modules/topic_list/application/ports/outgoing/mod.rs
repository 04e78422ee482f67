pub mod category_query;
pub mod feed_token_store;
pub mod privilege_query;
pub mod sorted_topic_provider;
pub mod user_settings_query;

pub use category_query::{CategoryQuery, CategoryQueryError, CategorySummary};
pub use feed_token_store::{FeedTokenError, FeedTokenStore};
pub use privilege_query::{PrivilegeQuery, PrivilegeQueryError};
pub use sorted_topic_provider::{
    SortedTopicProvider, SortedTopicProviderError, SortedTopics, TopicSummary,
};
pub use user_settings_query::{UserSettingsQuery, UserSettingsQueryError};
