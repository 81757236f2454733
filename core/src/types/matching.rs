use serde::{Deserialize, Serialize};
use std::fmt;

/// Case matching behavior for search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Always case insensitive.
    #[default]
    Insensitive,
    /// Always case sensitive.
    Sensitive,
    /// Case-insensitive unless the query contains uppercase.
    Smart,
}

impl CaseMatching {
    /// Whether a query should be compared case-insensitively.
    pub fn ignores_case(self, query: &str) -> bool {
        match self {
            CaseMatching::Insensitive => true,
            CaseMatching::Sensitive => false,
            CaseMatching::Smart => !query.chars().any(char::is_uppercase),
        }
    }
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// How a query is tested against a field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The query must appear verbatim inside the field.
    #[default]
    Substring,
    /// The query characters must appear in order, scored by a fuzzy matcher.
    Fuzzy,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::Fuzzy => write!(f, "fuzzy"),
        }
    }
}
