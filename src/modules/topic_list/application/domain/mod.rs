mod filter;
mod listing_page;
mod selection;
mod settings;
mod sort;
mod term;
mod topic_query;
mod view;

pub use filter::TopicFilter;
pub use listing_page::ListingPage;
pub use selection::{CategorySelection, SelectedCategory, SelectedTag, TagSelection};
pub use settings::UserSettings;
pub use sort::TopicSort;
pub use term::Term;
pub use topic_query::TopicQuery;
pub use view::{
    ChipLists, FilterChip, PageMeta, Permissions, RssFeed, TermChip, TopicListPage,
    TopicListView,
};
