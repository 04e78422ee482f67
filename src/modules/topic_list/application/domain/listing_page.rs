use super::sort::TopicSort;

/// A named listing page and the sort it delegates to the topic provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingPage {
    pub name: &'static str,
    pub sort: TopicSort,
}

impl ListingPage {
    pub const RECENT: ListingPage = ListingPage {
        name: "recent",
        sort: TopicSort::Recent,
    };

    pub const POPULAR: ListingPage = ListingPage {
        name: "popular",
        sort: TopicSort::Posts,
    };

    pub const TOP: ListingPage = ListingPage {
        name: "top",
        sort: TopicSort::Votes,
    };

    pub const ALL: [ListingPage; 3] = [Self::RECENT, Self::POPULAR, Self::TOP];

    pub fn by_name(name: &str) -> Option<ListingPage> {
        Self::ALL.into_iter().find(|page| page.name == name)
    }

    /// Template the view is rendered with.
    pub fn template(&self) -> &'static str {
        self.name
    }
}
