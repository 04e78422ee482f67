use crate::shared::web::{build_query_string, QueryParams};
use crate::topic_list::application::domain::{ChipLists, FilterChip, Term, TermChip, TopicFilter};

/// Filter and term chips linking to `base_url` with the residual `query`
/// (already stripped of `page`) plus the chip's own value.
pub fn build_chips(
    base_url: &str,
    filter: &TopicFilter,
    term: Term,
    query: &QueryParams,
) -> ChipLists {
    let filters = TopicFilter::choices()
        .into_iter()
        .map(|choice| FilterChip {
            name: choice.label().to_string(),
            url: format!("{base_url}{}", build_query_string(query, "filter", choice.as_str())),
            selected: &choice == filter,
            icon: choice.icon().to_string(),
            filter: choice,
        })
        .collect::<Vec<_>>();

    let terms = Term::ALL
        .into_iter()
        .map(|choice| TermChip {
            name: choice.label(),
            url: format!("{base_url}{}", build_query_string(query, "term", choice.query_value())),
            selected: choice == term,
            term: choice,
        })
        .collect::<Vec<_>>();

    ChipLists {
        selected_filter: filters.iter().find(|chip| chip.selected).cloned(),
        selected_term: terms.iter().find(|chip| chip.selected).cloned(),
        filters,
        terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_chip_selected_per_list() {
        let chips = build_chips("recent", &TopicFilter::Watched, Term::Week, &QueryParams::default());

        assert_eq!(chips.filters.len(), 4);
        assert_eq!(chips.terms.len(), 4);
        assert_eq!(chips.filters.iter().filter(|c| c.selected).count(), 1);
        assert_eq!(chips.terms.iter().filter(|c| c.selected).count(), 1);
        assert_eq!(chips.selected_filter.unwrap().filter, TopicFilter::Watched);
        assert_eq!(chips.selected_term.unwrap().term, Term::Week);
    }

    #[test]
    fn chip_urls_carry_residual_query() {
        let query = QueryParams::parse("cid=3&filter=new&term=daily");
        let chips = build_chips("recent", &TopicFilter::New, Term::Day, &query);

        assert_eq!(chips.filters[0].url, "recent?cid=3&term=daily");
        assert_eq!(chips.filters[2].url, "recent?cid=3&filter=watched&term=daily");
        assert_eq!(chips.terms[0].url, "recent?cid=3&filter=new");
        assert_eq!(chips.terms[3].url, "recent?cid=3&filter=new&term=monthly");
    }

    #[test]
    fn chips_on_home_page_are_query_only() {
        let chips = build_chips("", &TopicFilter::All, Term::AllTime, &QueryParams::default());

        assert_eq!(chips.filters[0].url, "");
        assert_eq!(chips.filters[1].url, "?filter=new");
        assert_eq!(chips.terms[1].url, "?term=daily");
    }

    #[test]
    fn labels_and_icons() {
        let chips = build_chips("recent", &TopicFilter::All, Term::AllTime, &QueryParams::default());

        assert_eq!(chips.filters[0].name, "[[unread:all-topics]]");
        assert_eq!(chips.filters[3].icon, "fa-reply");
        assert_eq!(chips.terms[0].name, "[[recent:alltime]]");
        assert_eq!(chips.terms[2].name, "[[recent:week]]");
    }

    #[test]
    fn unrecognized_filter_selects_no_chip() {
        let filter = TopicFilter::from_query(Some("mystery"));
        let chips = build_chips("recent", &filter, Term::AllTime, &QueryParams::default());

        assert!(chips.filters.iter().all(|c| !c.selected));
        assert!(chips.selected_filter.is_none());
        assert!(chips.selected_term.is_some());
    }
}
