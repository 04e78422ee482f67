pub mod breadcrumbs;
pub mod link_tags;
pub mod pagination;
pub mod query_string;

pub use breadcrumbs::{build_breadcrumbs, Breadcrumb};
pub use link_tags::{build_link_tags, link_header, LinkTag};
pub use pagination::{create_pagination, PageEntry, PageLink, Pagination, RelLink};
pub use query_string::{build_query_string, QueryParams};
