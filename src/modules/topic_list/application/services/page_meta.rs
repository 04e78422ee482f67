use crate::shared::config::SiteConfig;
use crate::shared::web::{build_breadcrumbs, Breadcrumb};
use crate::topic_list::application::domain::PageMeta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub meta: PageMeta,
    /// Prefix for chip and category links: `""` on the home page, the page
    /// name otherwise.
    pub base_url: String,
}

/// A listing reached through anything other than its own route (or its api
/// mirror) is being shown as the home page.
pub fn is_displayed_as_home(site: &SiteConfig, page_name: &str, original_url: &str) -> bool {
    let rp = &site.relative_path;
    !(original_url.starts_with(&format!("{rp}/api/{page_name}"))
        || original_url.starts_with(&format!("{rp}/{page_name}")))
}

pub fn resolve_page_context(site: &SiteConfig, page_name: &str, original_url: &str) -> PageContext {
    if is_displayed_as_home(site, page_name, original_url) {
        return PageContext {
            meta: PageMeta {
                title: site
                    .home_page_title
                    .clone()
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| "[[pages:home]]".to_string()),
                breadcrumbs: None,
            },
            base_url: String::new(),
        };
    }

    PageContext {
        meta: PageMeta {
            title: format!("[[pages:{page_name}]]"),
            breadcrumbs: Some(build_breadcrumbs(
                &site.relative_path,
                vec![Breadcrumb::label(format!("[[{page_name}:title]]"))],
            )),
        },
        base_url: page_name.to_string(),
    }
}
