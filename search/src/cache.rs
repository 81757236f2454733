//! Size-one memoization of the filtered view.

use crate::keys::SearchKeys;
use crate::query::QueryMatcher;
use crate::results::FilteredItems;
use sift_core::types::Record;
use std::sync::Arc;

/// The inputs of the last derivation and its output.
struct Entry<R> {
    query: String,
    keys: SearchKeys,
    result: FilteredItems<R>,
}

impl<R> Entry<R> {
    /// Items are compared by identity; query and keys by value.
    fn is_for(&self, items: &Arc<[R]>, query: &str, keys: &SearchKeys) -> bool {
        Arc::ptr_eq(&self.result.items, items) && self.query == query && &self.keys == keys
    }
}

pub(crate) struct FilterCache<R> {
    entry: Option<Entry<R>>,
    recomputes: u64,
}

impl<R> FilterCache<R> {
    pub(crate) fn new() -> Self {
        Self {
            entry: None,
            recomputes: 0,
        }
    }

    pub(crate) fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

impl<R: Record> FilterCache<R> {
    /// Returns the cached view for the triple, deriving it on a miss.
    pub(crate) fn get_or_compute(
        &mut self,
        items: &Arc<[R]>,
        query: &str,
        keys: &SearchKeys,
        matcher: &mut QueryMatcher,
    ) -> FilteredItems<R> {
        if let Some(entry) = self
            .entry
            .as_ref()
            .filter(|entry| entry.is_for(items, query, keys))
        {
            tracing::trace!("filter cache hit");
            return entry.result.clone();
        }

        let result = match matcher.matching_indices(&**items, query, keys) {
            None => FilteredItems::all(Arc::clone(items)),
            Some(indices) => FilteredItems::subset(Arc::clone(items), indices),
        };
        self.recomputes += 1;
        tracing::debug!(
            items = items.len(),
            matched = result.len(),
            keys = keys.len(),
            recomputes = self.recomputes,
            "filtered items recomputed"
        );

        self.entry = Some(Entry {
            query: query.to_string(),
            keys: keys.clone(),
            result: result.clone(),
        });
        result
    }
}
