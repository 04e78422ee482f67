use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Breadcrumb {
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }
}

/// Root-relative crumb urls are prefixed with the mount path; absolute and
/// protocol-relative urls are left alone.
pub fn build_breadcrumbs(relative_path: &str, crumbs: Vec<Breadcrumb>) -> Vec<Breadcrumb> {
    crumbs
        .into_iter()
        .map(|crumb| Breadcrumb {
            url: crumb.url.map(|url| {
                if url.starts_with('/') && !url.starts_with("//") {
                    format!("{relative_path}{url}")
                } else {
                    url
                }
            }),
            ..crumb
        })
        .collect()
}
