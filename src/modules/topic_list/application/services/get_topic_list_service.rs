use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::shared::config::SiteConfig;
use crate::shared::web::build_query_string;
use crate::topic_list::application::domain::{
    ListingPage, Permissions, TopicFilter, TopicListPage, TopicListView,
};
use crate::topic_list::application::ports::incoming::use_cases::{
    GetTopicListError, GetTopicListUseCase, TopicListRequest,
};

use super::chips::build_chips;
use super::context_gatherer::{gather_context, TopicListPorts};
use super::page_links::paginate;
use super::page_meta::{resolve_page_context, PageContext};
use super::query_builder::{
    build_topic_query, coerce_page, requested_cids, requested_tags, TopicQueryInput,
};
use super::rss::build_rss_feed;
use super::term_resolver::{resolve_term, TermResolution};

/// Serves one listing page (`recent`, `popular`, `top`).
#[derive(Clone)]
pub struct GetTopicListService {
    page: ListingPage,
    site: Arc<SiteConfig>,
    ports: TopicListPorts,
}

impl GetTopicListService {
    pub fn new(page: ListingPage, site: Arc<SiteConfig>, ports: TopicListPorts) -> Self {
        Self { page, site, ports }
    }
}

#[async_trait]
impl GetTopicListUseCase for GetTopicListService {
    async fn execute(
        &self,
        request: TopicListRequest,
    ) -> Result<Option<TopicListPage>, GetTopicListError> {
        let TopicListRequest {
            requester,
            original_url,
            query,
        } = request;

        let term = match resolve_term(query.get("term")) {
            TermResolution::Resolved(term) => term,
            TermResolution::Invalid => {
                debug!(page = self.page.name, term = ?query.get("term"), "Unknown term");
                return Ok(None);
            }
        };
        let filter = TopicFilter::from_query(query.get("filter"));

        // Stage 2: requester context
        let tags = requested_tags(&query);
        let context = gather_context(&self.ports, requester, requested_cids(&query), &tags).await?;

        // Stage 3-4: retrieval
        let topic_query = build_topic_query(TopicQueryInput {
            settings: context.settings,
            uid: requester.uid,
            query: &query,
            filter: filter.clone(),
            term,
            sort: self.page.sort,
        });
        debug!(
            page = self.page.name,
            start = topic_query.start,
            stop = topic_query.stop,
            sort = topic_query.sort.as_str(),
            "Fetching sorted topics"
        );
        let topics = self.ports.topics.get_sorted_topics(topic_query).await?;
        let topic_count = topics.topic_count;

        // Stage 5: view
        let PageContext { meta, base_url } =
            resolve_page_context(&self.site, self.page.name, &original_url);
        let residual = query.without("page");
        let all_categories_url = format!("{base_url}{}", build_query_string(&residual, "cid", ""));

        let links = paginate(
            &self.site,
            self.page.name,
            coerce_page(query.get("page")),
            topic_count,
            context.settings.topics_per_page(),
            &query,
        );

        let view = TopicListView::new(topics)
            .with_page_meta(meta)
            .with_permissions(Permissions::new(context.can_post, context.is_privileged))
            .with_selections(context.categories, context.tags, all_categories_url)
            .with_rss(build_rss_feed(
                &self.site,
                self.page.name,
                requester,
                context.feed_token.as_deref(),
            ))
            .with_chips(build_chips(&base_url, &filter, term, &residual))
            .with_pagination(links.pagination);

        Ok(Some(TopicListPage {
            template: self.page.template(),
            view,
            link_tags: links.link_tags,
        }))
    }
}
