//! Runtime search configuration.

use crate::error::SearchError;
use crate::keys::SearchKeys;
use sift_core::types::{CaseMatching, MatchMode, SearchSettings};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Quiet period before a typed query is applied.
    pub delay: Duration,
    pub keys: SearchKeys,
    pub case_matching: CaseMatching,
    pub mode: MatchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(300),
            keys: SearchKeys::default(),
            case_matching: CaseMatching::default(),
            mode: MatchMode::default(),
        }
    }
}

impl TryFrom<&SearchSettings> for SearchConfig {
    type Error = SearchError;

    fn try_from(settings: &SearchSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            delay: settings.delay(),
            keys: SearchKeys::parse(settings.keys.iter().cloned())?,
            case_matching: settings.case_matching,
            mode: settings.mode,
        })
    }
}
