use async_trait::async_trait;

use crate::topic_list::application::domain::{TopicListPage, TopicListView};
use crate::topic_list::application::ports::incoming::use_cases::{
    GetTopicListError, GetTopicListUseCase, TopicListRequest,
};

use super::fixtures::sorted_topics;

/// Listing use case answering every request with the same outcome.
#[derive(Clone)]
pub struct StubGetTopicListUseCase {
    result: Result<Option<TopicListPage>, GetTopicListError>,
}

impl StubGetTopicListUseCase {
    pub fn page(template: &'static str) -> Self {
        Self {
            result: Ok(Some(TopicListPage {
                template,
                view: TopicListView::new(sorted_topics(0, 0)),
                link_tags: vec![],
            })),
        }
    }

    pub fn with_page(page: TopicListPage) -> Self {
        Self {
            result: Ok(Some(page)),
        }
    }

    pub fn not_found() -> Self {
        Self { result: Ok(None) }
    }

    pub fn error(err: GetTopicListError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetTopicListUseCase for StubGetTopicListUseCase {
    async fn execute(
        &self,
        _request: TopicListRequest,
    ) -> Result<Option<TopicListPage>, GetTopicListError> {
        self.result.clone()
    }
}
