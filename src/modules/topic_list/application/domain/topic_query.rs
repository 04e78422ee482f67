use crate::auth::application::domain::entities::UserId;
use crate::shared::web::QueryParams;

use super::{filter::TopicFilter, sort::TopicSort, term::Term};

/// Normalized retrieval request handed to the topic provider.
///
/// `start` and `stop` are inclusive offsets; `stop >= start` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuery {
    pub cids: Vec<i64>,
    pub tags: Vec<String>,
    pub uid: UserId,
    pub start: u64,
    pub stop: u64,
    pub filter: TopicFilter,
    pub term: Term,
    pub sort: TopicSort,
    /// Raw `pinned` parameter, forwarded as given.
    pub float_pinned: Option<String>,
    pub query: QueryParams,
}

impl TopicQuery {
    pub fn limit(&self) -> u64 {
        self.stop - self.start + 1
    }

    /// Whether pinned topics should be floated to the top.
    pub fn floats_pinned(&self) -> bool {
        matches!(self.float_pinned.as_deref(), Some(v) if !v.is_empty() && v != "0" && v != "false")
    }
}
