use serde::Serialize;

use super::pagination::RelLink;

/// Document-level `<link>` metadata attached to the response, not the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

impl LinkTag {
    pub fn header_value(&self) -> String {
        format!("<{}>; rel=\"{}\"", self.href, self.rel)
    }
}

/// Canonical link for `page_name` (with `?page=N` past the first page)
/// followed by the pagination relation links, all made absolute against
/// `site_url`.
pub fn build_link_tags(
    site_url: &str,
    page_name: &str,
    rel_links: &[RelLink],
    page: u32,
) -> Vec<LinkTag> {
    let base = format!("{}/{}", site_url.trim_end_matches('/'), page_name);
    let page_suffix = if page > 1 {
        format!("?page={page}")
    } else {
        String::new()
    };

    let mut tags = Vec::with_capacity(rel_links.len() + 1);
    tags.push(LinkTag {
        rel: "canonical".to_string(),
        href: format!("{base}{page_suffix}"),
    });

    tags.extend(rel_links.iter().map(|link| LinkTag {
        rel: link.rel.clone(),
        href: format!("{base}{}", link.href),
    }));

    tags
}

/// `Link` header value for the given tags, `None` when there are none.
pub fn link_header(tags: &[LinkTag]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }

    Some(
        tags.iter()
            .map(LinkTag::header_value)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
