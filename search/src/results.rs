//! Filtered view types.

use std::fmt;
use std::sync::Arc;

/// Filtered subsequence of a shared item list.
///
/// Borrows nothing from the search: it shares the item slice and holds the
/// matching positions. Cloning is cheap. Use `iter()` to walk matched records
/// without collecting.
pub struct FilteredItems<R> {
    pub(crate) items: Arc<[R]>,
    /// `None` when every item matches.
    pub(crate) matches: Option<Arc<[usize]>>,
}

impl<R> FilteredItems<R> {
    pub(crate) fn all(items: Arc<[R]>) -> Self {
        Self {
            items,
            matches: None,
        }
    }

    pub(crate) fn subset(items: Arc<[R]>, matches: Vec<usize>) -> Self {
        Self {
            items,
            matches: Some(matches.into()),
        }
    }

    /// Number of matched records.
    pub fn len(&self) -> usize {
        match &self.matches {
            None => self.items.len(),
            Some(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the view contains every source item (blank query).
    pub fn is_unfiltered(&self) -> bool {
        self.matches.is_none()
    }

    /// Position in the source list of the `n`th matched record.
    pub fn source_index(&self, n: usize) -> Option<usize> {
        match &self.matches {
            None => (n < self.items.len()).then_some(n),
            Some(matches) => matches.get(n).copied(),
        }
    }

    /// The `n`th matched record.
    pub fn get(&self, n: usize) -> Option<&R> {
        self.source_index(n).and_then(|index| self.items.get(index))
    }

    /// Iterates over matched records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        (0..self.len()).filter_map(move |n| self.get(n))
    }

    /// Iterates over source positions of matched records.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter_map(move |n| self.source_index(n))
    }

    /// The full source list this view was derived from.
    pub fn source(&self) -> &Arc<[R]> {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<R> Clone for FilteredItems<R> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            matches: self.matches.clone(),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for FilteredItems<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
