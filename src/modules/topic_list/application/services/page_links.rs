use crate::shared::config::SiteConfig;
use crate::shared::web::{build_link_tags, create_pagination, LinkTag, Pagination, QueryParams};

/// Never less than one, even for an empty listing.
pub fn page_count(topic_count: u64, topics_per_page: u32) -> u32 {
    let per_page = u64::from(topics_per_page.max(1));
    let pages = topic_count.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub pagination: Pagination,
    pub link_tags: Vec<LinkTag>,
}

pub fn paginate(
    site: &SiteConfig,
    page_name: &str,
    current_page: i64,
    topic_count: u64,
    topics_per_page: u32,
    query: &QueryParams,
) -> PageLinks {
    let current = u32::try_from(current_page.max(1)).unwrap_or(u32::MAX);
    let pagination = create_pagination(current, page_count(topic_count, topics_per_page), query);
    let link_tags = build_link_tags(&site.url, page_name, &pagination.rel, current);

    PageLinks {
        pagination,
        link_tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            url: "https://forum.test".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn page_count_rounds_up_with_floor_of_one() {
        assert_eq!(page_count(45, 20), 3);
        assert_eq!(page_count(40, 20), 2);
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(1, 20), 1);
    }

    #[test]
    fn forty_five_topics_on_first_page() {
        let links = paginate(&site(), "recent", 1, 45, 20, &QueryParams::default());

        assert_eq!(links.pagination.page_count, 3);
        assert_eq!(links.pagination.current_page, 1);
        assert_eq!(links.link_tags[0].rel, "canonical");
        assert_eq!(links.link_tags[0].href, "https://forum.test/recent");
        assert!(links
            .link_tags
            .iter()
            .any(|tag| tag.rel == "next" && tag.href == "https://forum.test/recent?page=2"));
    }

    #[test]
    fn middle_page_links_both_ways() {
        let links = paginate(&site(), "top", 2, 45, 20, &QueryParams::parse("page=2"));

        assert_eq!(links.link_tags[0].href, "https://forum.test/top?page=2");
        assert!(links.link_tags.iter().any(|tag| tag.rel == "prev"));
        assert!(links.link_tags.iter().any(|tag| tag.rel == "next"));
    }

    #[test]
    fn negative_page_is_treated_as_first() {
        let links = paginate(&site(), "recent", -3, 5, 20, &QueryParams::default());

        assert_eq!(links.pagination.current_page, 1);
        assert_eq!(links.link_tags.len(), 1);
    }
}
