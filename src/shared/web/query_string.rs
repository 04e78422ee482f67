//! Ordered, repeatable query-string parameters.
//!
//! Listing pages keep the caller's query verbatim (including unknown keys and
//! repeated `cid`/`tag` values) so that every generated link preserves it.

/// Raw `key=value` pairs in request order. Keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Parses a raw query string. Undecodable input yields an empty set.
    pub fn parse(raw: &str) -> Self {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(raw).unwrap_or_else(|e| {
            tracing::debug!("Ignoring undecodable query string {:?}: {}", raw, e);
            Vec::new()
        });
        Self(pairs)
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Copy without any occurrence of `key`.
    pub fn without(&self, key: &str) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        )
    }

    /// Copy where `key` holds exactly `value`, kept at the position of its
    /// first occurrence or appended when absent.
    pub fn with(&self, key: &str, value: &str) -> Self {
        let mut pairs = Vec::with_capacity(self.0.len() + 1);
        let mut placed = false;

        for (k, v) in &self.0 {
            if k == key {
                if !placed {
                    pairs.push((k.clone(), value.to_string()));
                    placed = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }

        if !placed {
            pairs.push((key.to_string(), value.to_string()));
        }

        Self(pairs)
    }

    /// `application/x-www-form-urlencoded` form, without leading `?`.
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}

/// Query-string suffix for a link that sets (or, for an empty `value`,
/// removes) `key` on top of `query`. Cache-buster `_` is always dropped.
/// Returns `""` when nothing remains.
pub fn build_query_string(query: &QueryParams, key: &str, value: &str) -> String {
    let params = if value.is_empty() {
        query.without(key)
    } else {
        query.with(key, value)
    }
    .without("_");

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_repeats() {
        let query = QueryParams::parse("cid=1&tag=rust&cid=2&page=3");

        assert_eq!(query.get("cid"), Some("1"));
        assert_eq!(query.get_all("cid"), vec!["1".to_string(), "2".to_string()]);
        assert_eq!(query.get("page"), Some("3"));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn parse_empty_string_is_empty() {
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn without_removes_every_occurrence() {
        let query = QueryParams::parse("cid=1&cid=2&term=daily");
        let stripped = query.without("cid");

        assert!(!stripped.contains_key("cid"));
        assert_eq!(stripped.encode(), "term=daily");
    }

    #[test]
    fn with_replaces_in_place() {
        let query = QueryParams::parse("filter=new&term=daily&filter=watched");
        let updated = query.with("filter", "unreplied");

        assert_eq!(updated.encode(), "filter=unreplied&term=daily");
    }

    #[test]
    fn with_appends_missing_key() {
        let query = QueryParams::parse("term=daily");
        assert_eq!(query.with("page", "2").encode(), "term=daily&page=2");
    }

    #[test]
    fn build_query_string_sets_value() {
        let query = QueryParams::parse("term=weekly");
        assert_eq!(
            build_query_string(&query, "filter", "new"),
            "?term=weekly&filter=new"
        );
    }

    #[test]
    fn build_query_string_empty_value_removes_key() {
        let query = QueryParams::parse("filter=new");
        assert_eq!(build_query_string(&query, "filter", ""), "");
    }

    #[test]
    fn build_query_string_drops_cache_buster() {
        let query = QueryParams::parse("_=12345&term=daily");
        assert_eq!(build_query_string(&query, "cid", ""), "?term=daily");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let query = QueryParams::new(vec![("tag".to_string(), "a&b".to_string())]);
        assert_eq!(query.encode(), "tag=a%26b");
    }
}
