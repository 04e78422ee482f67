use serde::Serialize;

use crate::topic_list::application::ports::outgoing::category_query::CategorySummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCategory {
    /// `None` for the synthetic "several categories" entry.
    pub cid: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SelectedCategory {
    fn multiple() -> Self {
        Self {
            cid: None,
            name: "[[unread:multiple-categories-selected]]".to_string(),
            slug: None,
            icon: "fa-plus".to_string(),
            bg_color: None,
            color: None,
        }
    }
}

impl From<CategorySummary> for SelectedCategory {
    fn from(category: CategorySummary) -> Self {
        Self {
            cid: Some(category.cid),
            name: category.name,
            slug: Some(category.slug),
            icon: category.icon,
            bg_color: category.bg_color,
            color: category.color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub selected_category: Option<SelectedCategory>,
    pub selected_cids: Vec<i64>,
}

impl CategorySelection {
    /// No category restriction.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds the selection from the categories that actually resolved.
    pub fn from_categories(categories: Vec<CategorySummary>) -> Self {
        let selected_cids = categories.iter().map(|c| c.cid).collect::<Vec<_>>();

        let selected_category = match categories.len() {
            0 => None,
            1 => categories.into_iter().next().map(SelectedCategory::from),
            _ => Some(SelectedCategory::multiple()),
        };

        Self {
            selected_category,
            selected_cids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedTag {
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    pub selected_tag: Option<SelectedTag>,
    /// Escaped for display.
    pub selected_tags: Vec<String>,
}

impl TagSelection {
    pub fn from_raw(tags: &[String]) -> Self {
        let selected_tags = tags
            .iter()
            .filter(|tag| !tag.is_empty())
            .map(|tag| escape_html(tag))
            .collect::<Vec<_>>();

        let selected_tag = match selected_tags.as_slice() {
            [] => None,
            [only] => Some(SelectedTag {
                label: only.clone(),
            }),
            _ => Some(SelectedTag {
                label: "[[tags:multiple-tags-selected]]".to_string(),
            }),
        };

        Self {
            selected_tag,
            selected_tags,
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(cid: i64, name: &str) -> CategorySummary {
        CategorySummary {
            cid,
            name: name.to_string(),
            slug: format!("{cid}/{}", name.to_lowercase()),
            icon: "fa-comments".to_string(),
            bg_color: Some("#333".to_string()),
            color: None,
        }
    }

    #[test]
    fn no_categories_selects_nothing() {
        let selection = CategorySelection::from_categories(vec![]);

        assert!(selection.selected_category.is_none());
        assert!(selection.selected_cids.is_empty());
    }

    #[test]
    fn single_category_is_selected() {
        let selection = CategorySelection::from_categories(vec![category(4, "General")]);

        let selected = selection.selected_category.unwrap();
        assert_eq!(selected.cid, Some(4));
        assert_eq!(selected.name, "General");
        assert_eq!(selection.selected_cids, vec![4]);
    }

    #[test]
    fn several_categories_use_synthetic_entry() {
        let selection =
            CategorySelection::from_categories(vec![category(1, "A"), category(2, "B")]);

        let selected = selection.selected_category.unwrap();
        assert_eq!(selected.cid, None);
        assert_eq!(selected.name, "[[unread:multiple-categories-selected]]");
        assert_eq!(selected.icon, "fa-plus");
        assert_eq!(selection.selected_cids, vec![1, 2]);
    }

    #[test]
    fn single_tag_is_label() {
        let selection = TagSelection::from_raw(&["rust".to_string()]);

        assert_eq!(selection.selected_tag.unwrap().label, "rust");
        assert_eq!(selection.selected_tags, vec!["rust".to_string()]);
    }

    #[test]
    fn several_tags_use_placeholder_label() {
        let selection = TagSelection::from_raw(&["a".to_string(), "b".to_string()]);

        assert_eq!(
            selection.selected_tag.unwrap().label,
            "[[tags:multiple-tags-selected]]"
        );
        assert_eq!(selection.selected_tags.len(), 2);
    }

    #[test]
    fn tags_are_escaped() {
        let selection = TagSelection::from_raw(&["<b>&\"x\"".to_string()]);

        assert_eq!(selection.selected_tags[0], "&lt;b&gt;&amp;&quot;x&quot;");
    }

    #[test]
    fn slashes_quotes_and_backticks_are_escaped() {
        let selection = TagSelection::from_raw(&["a/b\\c`d'e".to_string()]);

        assert_eq!(selection.selected_tags[0], "a&#x2F;b&#x5C;c&#96;d&#x27;e");
    }

    #[test]
    fn no_tags_selects_nothing() {
        let selection = TagSelection::from_raw(&[String::new()]);

        assert!(selection.selected_tag.is_none());
        assert!(selection.selected_tags.is_empty());
    }
}
