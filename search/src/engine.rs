//! Filtered search over a caller-owned item list.

use crate::cache::FilterCache;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::keys::SearchKeys;
use crate::query::QueryMatcher;
use crate::results::FilteredItems;
use sift_core::types::{AppConfig, Record};
use sift_core::{Clock, Debounced, SystemClock};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Live query, settled query and the filtered view derived from them.
///
/// Each instance is independent. The query starts out empty; dropping the
/// search discards any pending settle.
pub struct FilteredSearch<R, C: Clock = SystemClock> {
    items: Arc<[R]>,
    keys: SearchKeys,
    query: Debounced<String, C>,
    matcher: QueryMatcher,
    cache: FilterCache<R>,
}

/// Create operations.
impl<R: Record, C: Clock> FilteredSearch<R, C> {
    /// Creates a search over `items` with an empty query.
    pub fn new(items: impl Into<Arc<[R]>>, config: SearchConfig, clock: C) -> Self {
        Self {
            items: items.into(),
            keys: config.keys,
            query: Debounced::new(String::new(), config.delay, clock),
            matcher: QueryMatcher::new(config.case_matching, config.mode),
            cache: FilterCache::new(),
        }
    }

    /// Creates a search from persisted settings.
    ///
    /// Fails if a configured key is not a valid field name.
    pub fn from_app_config(
        items: impl Into<Arc<[R]>>,
        app_config: &AppConfig,
        clock: C,
    ) -> Result<Self, SearchError> {
        let config = SearchConfig::try_from(&app_config.search)?;
        Ok(Self::new(items, config, clock))
    }
}

/// Mutation operations.
impl<R: Record, C: Clock> FilteredSearch<R, C> {
    /// Updates the live query.
    ///
    /// Never filters: the filtered view follows the settled query, which
    /// catches up once the query has been quiet for the configured delay.
    pub fn set_query(&mut self, query: impl ToString) {
        self.query.set(query.to_string());
    }

    /// Replaces the item list.
    pub fn set_items(&mut self, items: impl Into<Arc<[R]>>) {
        self.items = items.into();
    }

    pub fn set_search_keys(&mut self, keys: SearchKeys) {
        self.keys = keys;
    }

    /// Drops a pending settle without applying it.
    pub fn cancel_pending(&mut self) -> bool {
        self.query.cancel()
    }
}

/// Search operations.
impl<R: Record, C: Clock> FilteredSearch<R, C> {
    /// Drives the debounce forward without blocking.
    ///
    /// Returns true when the settled query was updated. Call this from the
    /// event loop, e.g. once `deadline()` has passed.
    pub fn tick(&mut self) -> bool {
        let fired = self.query.tick();
        if fired {
            tracing::debug!(query = %self.query.settled(), "search query settled");
        }
        fired
    }

    /// Returns the filtered view for the settled query.
    ///
    /// Derived at most once per distinct (items, settled query, keys).
    pub fn filtered_items(&mut self) -> FilteredItems<R> {
        self.cache.get_or_compute(
            &self.items,
            self.query.settled(),
            &self.keys,
            &mut self.matcher,
        )
    }
}

/// Query operations.
impl<R, C: Clock> FilteredSearch<R, C> {
    /// The live query, for binding to an input field.
    pub fn query(&self) -> &str {
        self.query.input()
    }

    /// The query the filtered view is derived from.
    pub fn settled_query(&self) -> &str {
        self.query.settled()
    }

    pub fn items(&self) -> &Arc<[R]> {
        &self.items
    }

    pub fn search_keys(&self) -> &SearchKeys {
        &self.keys
    }

    pub fn delay(&self) -> Duration {
        self.query.delay()
    }

    /// When the pending settle is due, if one is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.query.deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.query.is_pending()
    }

    /// Number of times the filtered view was actually derived.
    pub fn recompute_count(&self) -> u64 {
        self.cache.recomputes()
    }
}
