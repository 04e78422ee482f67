use serde::{Serialize, Serializer};

/// Secondary narrowing facet of a listing.
///
/// Unknown values are kept verbatim and handed to the topic provider
/// instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TopicFilter {
    #[default]
    All,
    New,
    Watched,
    Unreplied,
    Unrecognized(String),
}

impl TopicFilter {
    /// Chip order.
    pub fn choices() -> [TopicFilter; 4] {
        [
            TopicFilter::All,
            TopicFilter::New,
            TopicFilter::Watched,
            TopicFilter::Unreplied,
        ]
    }

    /// Absent and empty values both mean "no filter".
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.unwrap_or_default() {
            "" => TopicFilter::All,
            "new" => TopicFilter::New,
            "watched" => TopicFilter::Watched,
            "unreplied" => TopicFilter::Unreplied,
            other => TopicFilter::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TopicFilter::All => "",
            TopicFilter::New => "new",
            TopicFilter::Watched => "watched",
            TopicFilter::Unreplied => "unreplied",
            TopicFilter::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopicFilter::All => "[[unread:all-topics]]",
            TopicFilter::New => "[[unread:new-topics]]",
            TopicFilter::Watched => "[[unread:watched-topics]]",
            TopicFilter::Unreplied => "[[unread:unreplied-topics]]",
            TopicFilter::Unrecognized(_) => "",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TopicFilter::All => "fa-book",
            TopicFilter::New => "fa-clock-o",
            TopicFilter::Watched => "fa-bell-o",
            TopicFilter::Unreplied => "fa-reply",
            TopicFilter::Unrecognized(_) => "",
        }
    }
}

impl Serialize for TopicFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
