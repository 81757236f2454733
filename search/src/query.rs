//! Query matching against record fields.

use crate::keys::SearchKeys;
use nucleo::pattern::{AtomKind, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};
use sift_core::types::{CaseMatching, MatchMode, Record};

/// Returns true when the query selects every record.
pub(crate) fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Tests records against a settled query.
///
/// Holds the fuzzy matcher between derivations; it is only allocated the
/// first time a fuzzy query runs.
pub(crate) struct QueryMatcher {
    case_matching: CaseMatching,
    mode: MatchMode,
    fuzzy: Option<Matcher>,
    buf: Vec<char>,
}

impl QueryMatcher {
    pub(crate) fn new(case_matching: CaseMatching, mode: MatchMode) -> Self {
        Self {
            case_matching,
            mode,
            fuzzy: None,
            buf: Vec::new(),
        }
    }

    /// Indices of the records matching `query`, in original order.
    ///
    /// Returns `None` for a blank query, meaning every record matches.
    pub(crate) fn matching_indices<R: Record>(
        &mut self,
        items: &[R],
        query: &str,
        keys: &SearchKeys,
    ) -> Option<Vec<usize>> {
        if is_blank(query) {
            return None;
        }

        let indices = match self.mode {
            MatchMode::Substring => self.substring_matches(items, query, keys),
            MatchMode::Fuzzy => self.fuzzy_matches(items, query, keys),
        };
        Some(indices)
    }

    fn substring_matches<R: Record>(
        &self,
        items: &[R],
        query: &str,
        keys: &SearchKeys,
    ) -> Vec<usize> {
        let ignore_case = self.case_matching.ignores_case(query);
        let needle = if ignore_case {
            query.to_lowercase()
        } else {
            query.to_string()
        };

        items
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                keys.iter().any(|key| {
                    record.field(key).is_some_and(|value| {
                        if ignore_case {
                            value.to_lowercase().contains(&needle)
                        } else {
                            value.contains(needle.as_str())
                        }
                    })
                })
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn fuzzy_matches<R: Record>(
        &mut self,
        items: &[R],
        query: &str,
        keys: &SearchKeys,
    ) -> Vec<usize> {
        let case_matching = match self.case_matching {
            CaseMatching::Sensitive => nucleo::pattern::CaseMatching::Respect,
            CaseMatching::Insensitive => nucleo::pattern::CaseMatching::Ignore,
            CaseMatching::Smart => nucleo::pattern::CaseMatching::Smart,
        };
        let pattern = Pattern::new(query, case_matching, Normalization::Never, AtomKind::Fuzzy);
        let matcher = self
            .fuzzy
            .get_or_insert_with(|| Matcher::new(NucleoConfig::DEFAULT));

        let mut indices = Vec::new();
        for (index, record) in items.iter().enumerate() {
            for key in keys {
                let Some(value) = record.field(key) else {
                    continue;
                };
                let haystack = Utf32Str::new(&value, &mut self.buf);
                if pattern.score(haystack, matcher).is_some() {
                    indices.push(index);
                    break;
                }
            }
        }
        indices
    }
}
