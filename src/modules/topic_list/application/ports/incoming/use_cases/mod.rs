pub mod get_topic_list;

pub use get_topic_list::{GetTopicListError, GetTopicListUseCase, TopicListRequest};
