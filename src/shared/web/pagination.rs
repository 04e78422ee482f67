//! Page-link descriptor used by listing templates.

use std::collections::BTreeSet;

use serde::Serialize;

use super::query_string::QueryParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: u32,
    pub active: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub qs: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageEntry {
    Page { page: u32, active: bool, qs: String },
    Separator { separator: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelLink {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub prev: PageLink,
    pub next: PageLink,
    pub first: PageLink,
    pub last: PageLink,
    pub rel: Vec<RelLink>,
    pub pages: Vec<PageEntry>,
    pub current_page: u32,
    pub page_count: u32,
}

fn page_qs(query: &QueryParams, page: u32) -> String {
    query.with("page", &page.to_string()).encode()
}

/// Builds the descriptor for `current_page` out of `page_count`.
///
/// Shows the first two pages, the last two, and a five-page window around
/// the current one. A gap of exactly one page is filled in; wider gaps get
/// a separator.
pub fn create_pagination(current_page: u32, page_count: u32, query: &QueryParams) -> Pagination {
    if page_count <= 1 {
        return Pagination {
            prev: PageLink {
                page: 1,
                active: current_page > 1,
                qs: String::new(),
            },
            next: PageLink {
                page: 1,
                active: current_page < page_count,
                qs: String::new(),
            },
            first: PageLink {
                page: 1,
                active: current_page == 1,
                qs: String::new(),
            },
            last: PageLink {
                page: 1,
                active: current_page == page_count.max(1),
                qs: String::new(),
            },
            rel: Vec::new(),
            pages: Vec::new(),
            current_page: current_page.max(1),
            page_count: 1,
        };
    }

    let query = query.without("_");
    let current = current_page.max(1);
    let previous = current.saturating_sub(1).max(1);
    let next = current.saturating_add(1).min(page_count);

    let count = i64::from(page_count);
    let mut start_page = (i64::from(current) - 2).max(1);
    if start_page > count - 5 {
        start_page -= 2 - (count - i64::from(current));
    }

    let mut shown: BTreeSet<i64> = [1, 2, count - 1, count].into_iter().collect();
    shown.extend(start_page..start_page + 5);

    let shown: Vec<u32> = shown
        .into_iter()
        .filter(|page| *page > 0 && *page <= count)
        .map(|page| page as u32)
        .collect();

    let mut pages = Vec::with_capacity(shown.len() + 2);
    for (index, page) in shown.iter().copied().enumerate() {
        if index > 0 {
            let before = shown[index - 1];
            if page - before == 2 {
                pages.push(PageEntry::Page {
                    page: page - 1,
                    active: false,
                    qs: page_qs(&query, page - 1),
                });
            } else if page - before > 1 {
                pages.push(PageEntry::Separator { separator: true });
            }
        }

        pages.push(PageEntry::Page {
            page,
            active: page == current,
            qs: page_qs(&query, page),
        });
    }

    let mut rel = Vec::new();
    if current < page_count {
        rel.push(RelLink {
            rel: "next".to_string(),
            href: format!("?{}", page_qs(&query, next)),
        });
    }
    if current > 1 {
        rel.push(RelLink {
            rel: "prev".to_string(),
            href: format!("?{}", page_qs(&query, previous)),
        });
    }

    Pagination {
        prev: PageLink {
            page: previous,
            active: current > 1,
            qs: page_qs(&query, previous),
        },
        next: PageLink {
            page: next,
            active: current < page_count,
            qs: page_qs(&query, next),
        },
        first: PageLink {
            page: 1,
            active: current == 1,
            qs: page_qs(&query, 1),
        },
        last: PageLink {
            page: page_count,
            active: current == page_count,
            qs: page_qs(&query, page_count),
        },
        rel,
        pages,
        current_page: current,
        page_count,
    }
}
