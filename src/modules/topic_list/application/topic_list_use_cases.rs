use std::sync::Arc;

use crate::topic_list::application::ports::incoming::use_cases::GetTopicListUseCase;

#[derive(Clone)]
pub struct TopicListUseCases {
    pub recent: Arc<dyn GetTopicListUseCase + Send + Sync>,
    pub popular: Arc<dyn GetTopicListUseCase + Send + Sync>,
    pub top: Arc<dyn GetTopicListUseCase + Send + Sync>,
}

impl TopicListUseCases {
    pub fn by_name(&self, name: &str) -> Option<&Arc<dyn GetTopicListUseCase + Send + Sync>> {
        match name {
            "recent" => Some(&self.recent),
            "popular" => Some(&self.popular),
            "top" => Some(&self.top),
            _ => None,
        }
    }
}
