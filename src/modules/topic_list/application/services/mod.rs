pub mod chips;
pub mod context_gatherer;
pub mod get_topic_list_service;
pub mod page_links;
pub mod page_meta;
pub mod query_builder;
pub mod rss;
pub mod term_resolver;

pub use context_gatherer::{gather_context, RequestContext, TopicListPorts};
pub use get_topic_list_service::GetTopicListService;
