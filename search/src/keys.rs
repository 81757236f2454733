//! Field names inspected by a search.

use crate::error::SearchError;
use sift_core::types::FieldName;

/// Keys used when the caller does not supply any.
pub const DEFAULT_SEARCH_KEYS: [&str; 2] = ["title", "name"];

/// Ordered set of record fields to search.
///
/// Insertion order is kept for iteration and duplicates are dropped. An empty
/// set is valid: it matches nothing for a non-blank query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKeys(Vec<FieldName>);

impl SearchKeys {
    pub fn new(keys: impl IntoIterator<Item = FieldName>) -> Self {
        let mut unique: Vec<FieldName> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        Self(unique)
    }

    /// Validates and collects raw field names.
    pub fn parse<I, S>(keys: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = keys
            .into_iter()
            .map(|key| {
                let key = key.into();
                FieldName::try_new(key.clone())
                    .map_err(|source| SearchError::InvalidKey { key, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(keys))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SearchKeys {
    fn default() -> Self {
        Self::new(
            DEFAULT_SEARCH_KEYS
                .iter()
                .filter_map(|key| FieldName::try_new(key.to_string()).ok()),
        )
    }
}

impl FromIterator<FieldName> for SearchKeys {
    fn from_iter<I: IntoIterator<Item = FieldName>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SearchKeys {
    type Item = &'a FieldName;
    type IntoIter = std::slice::Iter<'a, FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
