use crate::auth::application::domain::entities::UserId;
use crate::shared::web::QueryParams;
use crate::topic_list::application::domain::{Term, TopicFilter, TopicQuery, TopicSort, UserSettings};

/// Leading-integer parse of the `page` parameter. Missing, zero and
/// non-numeric values become 1; negative values are kept.
pub fn coerce_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };

    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => sign * n,
    }
}

/// Category ids named by `cid`. Values that are not integers are dropped.
pub fn requested_cids(query: &QueryParams) -> Vec<i64> {
    query
        .get_all("cid")
        .iter()
        .filter_map(|raw| raw.trim().parse::<i64>().ok())
        .collect()
}

pub fn requested_tags(query: &QueryParams) -> Vec<String> {
    query
        .get_all("tag")
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub struct TopicQueryInput<'a> {
    pub settings: UserSettings,
    pub uid: UserId,
    pub query: &'a QueryParams,
    pub filter: TopicFilter,
    pub term: Term,
    pub sort: TopicSort,
}

pub fn build_topic_query(input: TopicQueryInput<'_>) -> TopicQuery {
    let page = coerce_page(input.query.get("page"));
    let per_page = i64::from(input.settings.topics_per_page());

    let start = page.saturating_sub(1).saturating_mul(per_page).max(0) as u64;
    let stop = start + per_page as u64 - 1;

    TopicQuery {
        cids: requested_cids(input.query),
        tags: requested_tags(input.query),
        uid: input.uid,
        start,
        stop,
        filter: input.filter,
        term: input.term,
        sort: input.sort,
        float_pinned: input.query.get("pinned").map(str::to_string),
        query: input.query.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(raw_query: &str, per_page: u32) -> TopicQuery {
        let query = QueryParams::parse(raw_query);
        build_topic_query(TopicQueryInput {
            settings: UserSettings::new(per_page),
            uid: UserId::from(3),
            query: &query,
            filter: TopicFilter::All,
            term: Term::AllTime,
            sort: TopicSort::Recent,
        })
    }

    #[test]
    fn coerce_page_follows_leading_integer_rules() {
        assert_eq!(coerce_page(None), 1);
        assert_eq!(coerce_page(Some("")), 1);
        assert_eq!(coerce_page(Some("abc")), 1);
        assert_eq!(coerce_page(Some("0")), 1);
        assert_eq!(coerce_page(Some("3")), 3);
        assert_eq!(coerce_page(Some("4abc")), 4);
        assert_eq!(coerce_page(Some(" 2")), 2);
        assert_eq!(coerce_page(Some("-2")), -2);
    }

    #[test]
    fn window_for_page() {
        let query = build("page=3", 20);

        assert_eq!(query.start, 40);
        assert_eq!(query.stop, 59);
    }

    #[test]
    fn first_page_when_page_missing_or_invalid() {
        for raw in ["", "page=abc", "page=0", "page=-5"] {
            let query = build(raw, 10);
            assert_eq!(query.start, 0, "query {raw:?}");
            assert_eq!(query.stop, 9, "query {raw:?}");
        }
    }

    #[test]
    fn stop_never_precedes_start() {
        let query = build("page=7", 1);

        assert_eq!(query.start, 6);
        assert_eq!(query.stop, 6);
    }

    #[test]
    fn carries_request_inputs() {
        let query = build("cid=2&cid=x&cid=5&tag=rust&tag=&pinned=1&foo=bar", 20);

        assert_eq!(query.cids, vec![2, 5]);
        assert_eq!(query.tags, vec!["rust".to_string()]);
        assert_eq!(query.uid, UserId::from(3));
        assert_eq!(query.float_pinned.as_deref(), Some("1"));
        assert_eq!(query.query.get("foo"), Some("bar"));
    }
}
