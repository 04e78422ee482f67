use std::sync::Arc;

use actix_web::web;

use crate::shared::config::SiteConfig;
use crate::tests::support::fixtures::site_config;
use crate::tests::support::stubs::StubGetTopicListUseCase;
use crate::topic_list::application::ports::incoming::use_cases::GetTopicListUseCase;
use crate::topic_list::application::topic_list_use_cases::TopicListUseCases;
use crate::AppState;

pub struct TestAppStateBuilder {
    recent: Arc<dyn GetTopicListUseCase + Send + Sync>,
    popular: Arc<dyn GetTopicListUseCase + Send + Sync>,
    top: Arc<dyn GetTopicListUseCase + Send + Sync>,
    site: SiteConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            recent: Arc::new(StubGetTopicListUseCase::page("recent")),
            popular: Arc::new(StubGetTopicListUseCase::page("popular")),
            top: Arc::new(StubGetTopicListUseCase::page("top")),
            site: site_config(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_recent<U>(mut self, uc: U) -> Self
    where
        U: GetTopicListUseCase + Send + Sync + 'static,
    {
        self.recent = Arc::new(uc);
        self
    }

    pub fn with_popular<U>(mut self, uc: U) -> Self
    where
        U: GetTopicListUseCase + Send + Sync + 'static,
    {
        self.popular = Arc::new(uc);
        self
    }

    pub fn with_top<U>(mut self, uc: U) -> Self
    where
        U: GetTopicListUseCase + Send + Sync + 'static,
    {
        self.top = Arc::new(uc);
        self
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic_list: TopicListUseCases {
                recent: self.recent,
                popular: self.popular,
                top: self.top,
            },
            site: Arc::new(self.site),
        })
    }
}
