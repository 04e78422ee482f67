use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Coarse time window a listing is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    #[default]
    AllTime,
    Day,
    Week,
    Month,
}

impl Term {
    /// Chip order.
    pub const ALL: [Term; 4] = [Term::AllTime, Term::Day, Term::Week, Term::Month];

    /// Canonical key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::AllTime => "alltime",
            Term::Day => "day",
            Term::Week => "week",
            Term::Month => "month",
        }
    }

    /// Value carried in the `term` query parameter; empty for the default.
    pub fn query_value(&self) -> &'static str {
        match self {
            Term::AllTime => "",
            Term::Day => "daily",
            Term::Week => "weekly",
            Term::Month => "monthly",
        }
    }

    pub fn from_query_value(raw: &str) -> Option<Term> {
        match raw {
            "daily" => Some(Term::Day),
            "weekly" => Some(Term::Week),
            "monthly" => Some(Term::Month),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        format!("[[recent:{}]]", self.as_str())
    }

    /// Length of the window, `None` for all time.
    pub fn span(&self) -> Option<Duration> {
        match self {
            Term::AllTime => None,
            Term::Day => Some(Duration::days(1)),
            Term::Week => Some(Duration::weeks(1)),
            Term::Month => Some(Duration::days(30)),
        }
    }
}
