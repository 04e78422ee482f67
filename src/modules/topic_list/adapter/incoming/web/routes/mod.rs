mod get_topic_list;

pub use get_topic_list::{get_home_handler, get_popular_handler, get_recent_handler, get_top_handler};
