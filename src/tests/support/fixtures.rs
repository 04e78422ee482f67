use chrono::{TimeZone, Utc};

use crate::shared::config::SiteConfig;
use crate::topic_list::application::ports::outgoing::{CategorySummary, SortedTopics, TopicSummary};

pub fn site_config() -> SiteConfig {
    SiteConfig {
        url: "https://forum.test".to_string(),
        relative_path: String::new(),
        home_page_title: None,
        home_page_route: "recent".to_string(),
        disable_rss: false,
        default_topics_per_page: 20,
        max_topics_per_page: 100,
    }
}

pub fn category(cid: i64, name: &str) -> CategorySummary {
    CategorySummary {
        cid,
        name: name.to_string(),
        slug: format!("{cid}/{}", name.to_lowercase()),
        icon: "fa-folder".to_string(),
        bg_color: Some("#0059b2".to_string()),
        color: Some("#ffffff".to_string()),
    }
}

pub fn topic_summary(tid: i64) -> TopicSummary {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    TopicSummary {
        tid,
        cid: 1,
        uid: 2,
        title: format!("Topic {tid}"),
        slug: format!("{tid}/topic-{tid}"),
        post_count: 3,
        view_count: 10,
        votes: 1,
        pinned: false,
        tags: vec![],
        created_at: created,
        last_posted_at: created,
    }
}

/// `shown` topics out of a listing of `topic_count`.
pub fn sorted_topics(topic_count: u64, shown: i64) -> SortedTopics {
    SortedTopics {
        topic_count,
        topics: (1..=shown).map(topic_summary).collect(),
        next_start: shown as u64,
    }
}
