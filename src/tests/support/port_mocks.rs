use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::UserId;
use crate::topic_list::application::domain::{TopicQuery, UserSettings};
use crate::topic_list::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategorySummary, FeedTokenError, FeedTokenStore,
    PrivilegeQuery, PrivilegeQueryError, SortedTopicProvider, SortedTopicProviderError,
    SortedTopics, UserSettingsQuery, UserSettingsQueryError,
};

mock! {
    pub SettingsQuery {}
    #[async_trait]
    impl UserSettingsQuery for SettingsQuery {
        async fn get_settings(&self, uid: UserId) -> Result<UserSettings, UserSettingsQueryError>;
    }
}

mock! {
    pub CategoryLookup {}
    #[async_trait]
    impl CategoryQuery for CategoryLookup {
        async fn get_categories(
            &self,
            cids: Vec<i64>,
        ) -> Result<Vec<CategorySummary>, CategoryQueryError>;
    }
}

mock! {
    pub FeedTokens {}
    #[async_trait]
    impl FeedTokenStore for FeedTokens {
        async fn get_or_create_token(&self, uid: UserId) -> Result<Option<String>, FeedTokenError>;
    }
}

mock! {
    pub Privileges {}
    #[async_trait]
    impl PrivilegeQuery for Privileges {
        async fn can_create_topics(&self, uid: UserId) -> Result<bool, PrivilegeQueryError>;
        async fn is_privileged(&self, uid: UserId) -> Result<bool, PrivilegeQueryError>;
    }
}

mock! {
    pub TopicProvider {}
    #[async_trait]
    impl SortedTopicProvider for TopicProvider {
        async fn get_sorted_topics(
            &self,
            query: TopicQuery,
        ) -> Result<SortedTopics, SortedTopicProviderError>;
    }
}
