use serde::Serialize;

/// Ordering strategy requested from the topic provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicSort {
    /// Latest reply first.
    Recent,
    /// Oldest reply first.
    Old,
    /// Newest topic first.
    Create,
    Posts,
    Votes,
    Views,
}

impl TopicSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicSort::Recent => "recent",
            TopicSort::Old => "old",
            TopicSort::Create => "create",
            TopicSort::Posts => "posts",
            TopicSort::Votes => "votes",
            TopicSort::Views => "views",
        }
    }
}
