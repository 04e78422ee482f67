use serde::Serialize;

use crate::shared::web::{Breadcrumb, LinkTag, Pagination};
use crate::topic_list::application::ports::outgoing::sorted_topic_provider::SortedTopics;

use super::{
    filter::TopicFilter,
    selection::{CategorySelection, SelectedCategory, SelectedTag, TagSelection},
    term::Term,
};

// ============================================================================
// View fragments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    /// `None` on the home page.
    pub breadcrumbs: Option<Vec<Breadcrumb>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    pub can_post: bool,
    pub show_select: bool,
    pub show_topic_tools: bool,
}

impl Permissions {
    pub fn new(can_post: bool, is_privileged: bool) -> Self {
        Self {
            can_post,
            show_select: is_privileged,
            show_topic_tools: is_privileged,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssFeed {
    pub disable_rss: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub name: String,
    pub url: String,
    pub selected: bool,
    pub filter: TopicFilter,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermChip {
    pub name: String,
    pub url: String,
    pub selected: bool,
    pub term: Term,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipLists {
    pub filters: Vec<FilterChip>,
    pub selected_filter: Option<FilterChip>,
    pub terms: Vec<TermChip>,
    pub selected_term: Option<TermChip>,
}

// ============================================================================
// Assembled view
// ============================================================================

/// Template data for a listing page: the retrieved result set plus the
/// display metadata layered on top of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicListView {
    #[serde(flatten)]
    pub topics: SortedTopics,

    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,

    pub can_post: bool,
    pub show_select: bool,
    pub show_topic_tools: bool,

    pub all_categories_url: String,
    pub selected_category: Option<SelectedCategory>,
    pub selected_cids: Vec<i64>,
    pub selected_tag: Option<SelectedTag>,
    pub selected_tags: Vec<String>,

    #[serde(rename = "feeds:disableRSS")]
    pub disable_rss: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss_feed_url: Option<String>,

    pub filters: Vec<FilterChip>,
    pub selected_filter: Option<FilterChip>,
    pub terms: Vec<TermChip>,
    pub selected_term: Option<TermChip>,

    pub pagination: Option<Pagination>,
}

impl TopicListView {
    pub fn new(topics: SortedTopics) -> Self {
        Self {
            topics,
            title: String::new(),
            breadcrumbs: None,
            can_post: false,
            show_select: false,
            show_topic_tools: false,
            all_categories_url: String::new(),
            selected_category: None,
            selected_cids: Vec::new(),
            selected_tag: None,
            selected_tags: Vec::new(),
            disable_rss: false,
            rss_feed_url: None,
            filters: Vec::new(),
            selected_filter: None,
            terms: Vec::new(),
            selected_term: None,
            pagination: None,
        }
    }

    pub fn with_page_meta(self, meta: PageMeta) -> Self {
        Self {
            title: meta.title,
            breadcrumbs: meta.breadcrumbs,
            ..self
        }
    }

    pub fn with_permissions(self, permissions: Permissions) -> Self {
        Self {
            can_post: permissions.can_post,
            show_select: permissions.show_select,
            show_topic_tools: permissions.show_topic_tools,
            ..self
        }
    }

    pub fn with_selections(
        self,
        categories: CategorySelection,
        tags: TagSelection,
        all_categories_url: String,
    ) -> Self {
        Self {
            all_categories_url,
            selected_category: categories.selected_category,
            selected_cids: categories.selected_cids,
            selected_tag: tags.selected_tag,
            selected_tags: tags.selected_tags,
            ..self
        }
    }

    pub fn with_rss(self, rss: RssFeed) -> Self {
        Self {
            disable_rss: rss.disable_rss,
            rss_feed_url: rss.url,
            ..self
        }
    }

    pub fn with_chips(self, chips: ChipLists) -> Self {
        Self {
            filters: chips.filters,
            selected_filter: chips.selected_filter,
            terms: chips.terms,
            selected_term: chips.selected_term,
            ..self
        }
    }

    pub fn with_pagination(self, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..self
        }
    }
}

/// Result of a listing request: the view rendered under `template`, and the
/// link tags the transport emits next to it.
#[derive(Debug, Clone, Serialize)]
pub struct TopicListPage {
    pub template: &'static str,
    #[serde(flatten)]
    pub view: TopicListView,
    #[serde(skip)]
    pub link_tags: Vec<LinkTag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::web::{create_pagination, QueryParams};

    fn empty_topics() -> SortedTopics {
        SortedTopics {
            topic_count: 0,
            topics: vec![],
            next_start: 0,
        }
    }

    #[test]
    fn serializes_with_template_keys() {
        let view = TopicListView::new(empty_topics())
            .with_page_meta(PageMeta {
                title: "[[pages:recent]]".to_string(),
                breadcrumbs: Some(vec![Breadcrumb::label("[[recent:title]]")]),
            })
            .with_permissions(Permissions::new(true, false))
            .with_rss(RssFeed {
                disable_rss: false,
                url: Some("/recent.rss".to_string()),
            })
            .with_pagination(create_pagination(1, 1, &QueryParams::default()));

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["title"], "[[pages:recent]]");
        assert_eq!(json["topicCount"], 0);
        assert_eq!(json["canPost"], true);
        assert_eq!(json["showSelect"], false);
        assert_eq!(json["feeds:disableRSS"], false);
        assert_eq!(json["rssFeedUrl"], "/recent.rss");
        assert_eq!(json["breadcrumbs"][0]["text"], "[[recent:title]]");
        assert!(json["selectedCategory"].is_null());
        assert_eq!(json["pagination"]["pageCount"], 1);
    }

    #[test]
    fn home_view_omits_breadcrumbs_and_feed_url() {
        let view = TopicListView::new(empty_topics())
            .with_page_meta(PageMeta {
                title: "[[pages:home]]".to_string(),
                breadcrumbs: None,
            })
            .with_rss(RssFeed {
                disable_rss: true,
                url: None,
            });

        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("breadcrumbs").is_none());
        assert!(json.get("rssFeedUrl").is_none());
        assert_eq!(json["feeds:disableRSS"], true);
    }

    #[test]
    fn page_flattens_view_under_template() {
        let page = TopicListPage {
            template: "top",
            view: TopicListView::new(empty_topics()),
            link_tags: vec![LinkTag {
                rel: "canonical".to_string(),
                href: "http://x/top".to_string(),
            }],
        };

        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["template"], "top");
        assert!(json.get("topics").is_some());
        assert!(json.get("linkTags").is_none());
        assert!(json.get("link_tags").is_none());
    }
}
