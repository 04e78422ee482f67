use crate::topic_list::application::domain::Term;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermResolution {
    Resolved(Term),
    /// A non-empty term that names no known window.
    Invalid,
}

pub fn resolve_term(raw: Option<&str>) -> TermResolution {
    match raw {
        None | Some("") => TermResolution::Resolved(Term::AllTime),
        Some(raw) => Term::from_query_value(raw)
            .map(TermResolution::Resolved)
            .unwrap_or(TermResolution::Invalid),
    }
}
